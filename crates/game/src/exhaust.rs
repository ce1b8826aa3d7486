//! Exhaust puffs behind the vehicle.
//!
//! Classic fixed-capacity pool: slots are reused in place and nothing
//! allocates inside the frame loop. Spawning is driven by vehicle speed;
//! when every slot is live the pool simply stops emitting until one frees
//! up: visual saturation, not an error.

use glam::Vec3;
use rand::Rng;

use crate::vehicle::VehicleState;

/// Pool capacity: the hard cap on simultaneously live puffs.
pub const MAX_PUFFS: usize = 50;

/// Minimum |speed| before the exhaust emits at all, m/s.
const SPEED_THRESHOLD: f32 = 2.0;
/// Spawn budget accumulated per meter traveled.
const PUFFS_PER_METER: f32 = 1.6;
/// Emitter offset behind the vehicle origin.
const REAR_OFFSET: f32 = 1.4;
const PIPE_HEIGHT: f32 = 0.35;
/// Rearward ejection speed relative to the vehicle.
const EJECT_SPEED: f32 = 2.5;
const UPWARD_BIAS: f32 = 1.2;
const VELOCITY_JITTER: f32 = 0.8;
/// Per-second relative growth of a live puff.
const GROWTH_RATE: f32 = 1.8;
const LIFETIME_RANGE: (f32, f32) = (0.5, 1.1);
const BASE_OPACITY: f32 = 0.85;
const BASE_SCALE: f32 = 0.25;

/// One pool slot. A slot is free once `age` has reached `lifetime`.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub age: f32,
    pub lifetime: f32,
    pub scale: f32,
    /// Proportional to remaining life; exactly 0 once the slot is free.
    pub opacity: f32,
}

impl Particle {
    fn empty() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            age: 0.0,
            lifetime: 0.0,
            scale: 0.0,
            opacity: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.age < self.lifetime
    }
}

/// Fixed-capacity exhaust puff pool.
pub struct ExhaustPool {
    particles: Vec<Particle>,
    /// Last slot spawned into; the free-slot scan starts just past it.
    cursor: usize,
    spawn_budget: f32,
}

impl Default for ExhaustPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ExhaustPool {
    pub fn new() -> Self {
        Self {
            particles: vec![Particle::empty(); MAX_PUFFS],
            cursor: 0,
            spawn_budget: 0.0,
        }
    }

    /// Advance all live puffs, then emit new ones according to the
    /// vehicle's speed. `dt == 0` accumulates no spawn budget.
    pub fn update(&mut self, vehicle: &VehicleState, rng: &mut impl Rng, dt: f32) {
        for particle in &mut self.particles {
            if !particle.is_alive() {
                continue;
            }
            particle.position += particle.velocity * dt;
            particle.scale *= 1.0 + GROWTH_RATE * dt;
            particle.age += dt;
            particle.opacity = if particle.age >= particle.lifetime {
                0.0
            } else {
                BASE_OPACITY * (1.0 - particle.age / particle.lifetime)
            };
        }

        let speed = vehicle.velocity.abs();
        if speed > SPEED_THRESHOLD && dt > 0.0 {
            self.spawn_budget += speed * PUFFS_PER_METER * dt;
        }
        while self.spawn_budget >= 1.0 {
            self.spawn_budget -= 1.0;
            if !self.spawn_one(vehicle, rng) {
                // Saturated: drop the rest of this frame's budget.
                self.spawn_budget = 0.0;
                break;
            }
        }
    }

    /// Spawn into the next free slot scanning forward (wrapping) from the
    /// last-used index. Returns false when every slot is live.
    fn spawn_one(&mut self, vehicle: &VehicleState, rng: &mut impl Rng) -> bool {
        for step in 1..=MAX_PUFFS {
            let idx = (self.cursor + step) % MAX_PUFFS;
            if self.particles[idx].is_alive() {
                continue;
            }
            self.cursor = idx;

            let forward = vehicle.forward();
            let jitter = Vec3::new(
                rng.gen::<f32>() - 0.5,
                (rng.gen::<f32>() - 0.5) * 0.5,
                rng.gen::<f32>() - 0.5,
            ) * VELOCITY_JITTER;
            let lifetime =
                LIFETIME_RANGE.0 + rng.gen::<f32>() * (LIFETIME_RANGE.1 - LIFETIME_RANGE.0);

            self.particles[idx] = Particle {
                position: vehicle.position - forward * REAR_OFFSET + Vec3::Y * PIPE_HEIGHT,
                velocity: -forward * EJECT_SPEED + Vec3::Y * UPWARD_BIAS + jitter,
                age: 0.0,
                lifetime,
                scale: BASE_SCALE,
                opacity: BASE_OPACITY,
            };
            return true;
        }
        false
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_alive()).count()
    }

    /// All slots, live or free, for material binding (free slots carry
    /// opacity 0).
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procgen::SeededRandom;

    fn cruising(velocity: f32) -> VehicleState {
        VehicleState {
            position: Vec3::new(0.0, 0.6, 0.0),
            yaw: 0.0,
            velocity,
            steering: 0.0,
        }
    }

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn active_count_never_exceeds_capacity() {
        let mut pool = ExhaustPool::new();
        let mut rng = SeededRandom::new(3);
        let vehicle = cruising(16.0);
        for _ in 0..600 {
            pool.update(&vehicle, &mut rng, DT);
            assert!(pool.active_count() <= MAX_PUFFS);
        }
        assert!(pool.active_count() > 0);
    }

    /// A single long frame accumulates more budget than there are slots:
    /// every slot fills, the remainder is dropped silently, and the cap
    /// holds.
    #[test]
    fn saturation_stops_spawning_silently() {
        let mut pool = ExhaustPool::new();
        let mut rng = SeededRandom::new(4);
        let vehicle = cruising(16.0);
        // 16 m/s * 1.6 puffs/m * 2.5 s = 64 requested puffs.
        pool.update(&vehicle, &mut rng, 2.5);
        assert_eq!(pool.active_count(), MAX_PUFFS);

        // The next normal frame keeps working.
        pool.update(&vehicle, &mut rng, DT);
        assert!(pool.active_count() <= MAX_PUFFS);
    }

    #[test]
    fn opacity_is_zero_exactly_for_dead_slots() {
        let mut pool = ExhaustPool::new();
        let mut rng = SeededRandom::new(8);
        let vehicle = cruising(12.0);
        for _ in 0..300 {
            pool.update(&vehicle, &mut rng, DT);
            for particle in pool.particles() {
                if particle.is_alive() {
                    assert!(particle.opacity > 0.0);
                } else {
                    assert_eq!(particle.opacity, 0.0);
                }
            }
        }
    }

    #[test]
    fn no_emission_below_speed_threshold_or_at_zero_dt() {
        let mut pool = ExhaustPool::new();
        let mut rng = SeededRandom::new(1);
        let slow = cruising(1.0);
        for _ in 0..120 {
            pool.update(&slow, &mut rng, DT);
        }
        assert_eq!(pool.active_count(), 0);

        let fast = cruising(16.0);
        for _ in 0..120 {
            pool.update(&fast, &mut rng, 0.0);
        }
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn puffs_age_monotonically_and_slots_recycle() {
        let mut pool = ExhaustPool::new();
        let mut rng = SeededRandom::new(42);
        let vehicle = cruising(10.0);

        // Emit a few puffs, then let the vehicle idle while they age out.
        for _ in 0..30 {
            pool.update(&vehicle, &mut rng, DT);
        }
        let emitted = pool.active_count();
        assert!(emitted > 0);

        let idle = cruising(0.0);
        let mut previous_ages: Vec<f32> = pool.particles().iter().map(|p| p.age).collect();
        for _ in 0..120 {
            pool.update(&idle, &mut rng, DT);
            for (particle, prev) in pool.particles().iter().zip(&previous_ages) {
                if particle.is_alive() {
                    assert!(particle.age >= *prev);
                }
            }
            previous_ages = pool.particles().iter().map(|p| p.age).collect();
        }
        // Longest lifetime is 1.1 s; after 2 s everything has expired.
        assert_eq!(pool.active_count(), 0);

        // New emission reuses the freed slots.
        for _ in 0..30 {
            pool.update(&vehicle, &mut rng, DT);
        }
        assert!(pool.active_count() > 0);
    }

    #[test]
    fn puffs_spawn_behind_the_vehicle_and_drift_back() {
        let mut pool = ExhaustPool::new();
        let mut rng = SeededRandom::new(6);
        // Facing -Z: behind is +Z.
        let vehicle = cruising(10.0);
        for _ in 0..10 {
            pool.update(&vehicle, &mut rng, DT);
        }
        for particle in pool.iter_active() {
            assert!(particle.position.z > 0.0);
            assert!(particle.velocity.z > 0.0);
            assert!(particle.velocity.y > 0.0);
        }
    }
}
