//! Autonomous wandering wildlife.
//!
//! Each agent orbits a fixed anchor with a slowly drifting heading, follows
//! the terrain height field, and derives its facing from its own advancing
//! trajectory. State is owned exclusively by the agent and mutated only by
//! its own update; agents live as entities in the scene's `hecs` world and
//! are addressed by index, never by pointer.

use engine_core::{Aabb, Transform};
use glam::{Vec2, Vec3};
use procgen::HeightField;
use rand::Rng;

use crate::species::{sample_range, Species};

/// Tolerance for the terrain non-penetration guarantee.
pub const GROUND_EPSILON: f32 = 0.01;

/// Heading-drift random walk rate, rad/s.
const DRIFT_RATE: f32 = 0.6;
/// Vertical bob for flyers.
const BOB_AMPLITUDE: f32 = 0.5;
const BOB_SPEED: f32 = 1.6;

/// Per-agent steering state. All ranges were resolved to concrete values at
/// spawn; the update only integrates.
#[derive(Debug, Clone)]
pub struct AgentState {
    pub species: Species,
    /// Fixed orbit center on the XZ plane.
    pub anchor: Vec2,
    pub orbit_radius: f32,
    /// Angular position along the orbit.
    pub angle: f32,
    pub angular_speed: f32,
    /// Bounded heading drift so orbits look organic rather than circular.
    pub drift: f32,
    pub drift_max: f32,
    /// Altitude above ground for flyers; unused for ground species.
    pub altitude: f32,
    pub bob_phase: f32,
    pub vertical_offset: f32,
    /// Sampled once at spawn from the scaled model bounds and held fixed;
    /// only the safety lift re-derives vertical extent per tick.
    pub foot_clearance: f32,
    /// Model-space bounds, kept for the per-tick safety lift.
    pub bounds: Aabb,
    pub flying: bool,
    /// Previous tick's (x, z) for yaw derivation.
    prev_xz: Vec2,
}

impl AgentState {
    /// Resolve spawn parameters from the species table and model bounds.
    /// Returns the agent plus its initial transform.
    pub fn spawn(
        species: Species,
        anchor: Vec2,
        bounds: Aabb,
        rng: &mut impl Rng,
    ) -> (Self, Transform) {
        let params = species.params();
        let scale = sample_range(params.scale, rng);
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let mut agent = Self {
            species,
            anchor,
            orbit_radius: sample_range(params.orbit_radius, rng),
            angle,
            angular_speed: sample_range(params.angular_speed, rng),
            drift: 0.0,
            drift_max: params.drift_max,
            altitude: sample_range(params.altitude_band, rng),
            bob_phase: rng.gen::<f32>() * std::f32::consts::TAU,
            vertical_offset: params.vertical_offset,
            foot_clearance: bounds.base_offset() * scale,
            bounds,
            flying: params.flying,
            prev_xz: Vec2::ZERO,
        };
        agent.prev_xz = agent.orbit_point();

        let mut transform = Transform::from_position_scale(Vec3::ZERO, scale);
        transform.position = Vec3::new(agent.prev_xz.x, 0.0, agent.prev_xz.y);
        (agent, transform)
    }

    /// Current point on the drifted orbit.
    fn orbit_point(&self) -> Vec2 {
        let heading = self.angle + self.drift;
        self.anchor + self.orbit_radius * Vec2::new(heading.cos(), heading.sin())
    }

    /// Advance one tick. Pure function of (state, terrain, rng, dt): no
    /// shared state is touched besides the agent's own transform.
    pub fn update(
        &mut self,
        transform: &mut Transform,
        terrain: &HeightField,
        rng: &mut impl Rng,
        dt: f32,
    ) {
        self.angle += self.angular_speed * dt;
        self.drift = (self.drift + (rng.gen::<f32>() - 0.5) * DRIFT_RATE * dt)
            .clamp(-self.drift_max, self.drift_max);

        let xz = self.orbit_point();
        let ground = terrain.height(xz.x, xz.y);
        let y = if self.flying {
            self.bob_phase += BOB_SPEED * dt;
            ground + self.altitude + BOB_AMPLITUDE * self.bob_phase.sin() + self.vertical_offset
        } else {
            ground + self.vertical_offset + self.foot_clearance
        };
        transform.position = Vec3::new(xz.x, y, xz.y);

        // Yaw from the trajectory; a zero-length delta leaves it unchanged.
        transform.face_xz(xz - self.prev_xz);
        self.prev_xz = xz;

        // Safety lift: recompute the world-space lowest point and push the
        // agent up by any penetration. Non-penetration is guaranteed, not
        // approximated.
        let lowest = self.bounds.lowest_world_y(transform);
        let penetration = ground - lowest;
        if penetration > GROUND_EPSILON {
            transform.position.y += penetration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procgen::SeededRandom;

    fn test_bounds() -> Aabb {
        Aabb::new(Vec3::new(-0.6, -0.4, -1.0), Vec3::new(0.6, 1.8, 1.0))
    }

    #[test]
    fn spawn_is_deterministic_for_same_seed() {
        let anchor = Vec2::new(3.0, -8.0);
        let (a, ta) = AgentState::spawn(
            Species::Zebra,
            anchor,
            test_bounds(),
            &mut SeededRandom::new(21),
        );
        let (b, tb) = AgentState::spawn(
            Species::Zebra,
            anchor,
            test_bounds(),
            &mut SeededRandom::new(21),
        );
        assert_eq!(a.orbit_radius, b.orbit_radius);
        assert_eq!(a.angular_speed, b.angular_speed);
        assert_eq!(a.angle, b.angle);
        assert_eq!(ta.scale, tb.scale);
    }

    #[test]
    fn ground_agent_never_penetrates_terrain() {
        let terrain = HeightField::default();
        let mut rng = SeededRandom::new(5);
        let (mut agent, mut transform) = AgentState::spawn(
            Species::Elephant,
            Vec2::new(12.0, 4.0),
            test_bounds(),
            &mut rng,
        );
        let dt = 1.0 / 60.0;
        for _ in 0..600 {
            agent.update(&mut transform, &terrain, &mut rng, dt);
            let ground = terrain.height(transform.position.x, transform.position.z);
            assert!(
                agent.bounds.lowest_world_y(&transform) >= ground - GROUND_EPSILON - 1e-4,
                "agent sank below terrain"
            );
            assert!(transform.position.y >= ground - GROUND_EPSILON - 1e-4);
        }
    }

    #[test]
    fn flyer_stays_inside_its_altitude_band() {
        let terrain = HeightField::default();
        let mut rng = SeededRandom::new(9);
        let (mut agent, mut transform) = AgentState::spawn(
            Species::Vulture,
            Vec2::new(-6.0, 10.0),
            test_bounds(),
            &mut rng,
        );
        let params = Species::Vulture.params();
        let dt = 1.0 / 60.0;
        for _ in 0..300 {
            agent.update(&mut transform, &terrain, &mut rng, dt);
            let ground = terrain.height(transform.position.x, transform.position.z);
            let above = transform.position.y - ground;
            assert!(above >= params.altitude_band.0 - BOB_AMPLITUDE - 1e-3);
            assert!(above <= params.altitude_band.1 + BOB_AMPLITUDE + 1e-3);
        }
    }

    /// Orbit integration: radius 10, 0.2 rad/s, ten 1-second ticks ends at
    /// angle 2.0 and stays on the radius-10 circle (drift only shifts phase).
    #[test]
    fn orbit_advances_at_angular_speed() {
        let terrain = HeightField::default();
        let mut rng = SeededRandom::new(1);
        let (mut agent, mut transform) =
            AgentState::spawn(Species::Zebra, Vec2::ZERO, test_bounds(), &mut rng);
        agent.orbit_radius = 10.0;
        agent.angular_speed = 0.2;
        agent.angle = 0.0;
        agent.drift = 0.0;

        for _ in 0..10 {
            agent.update(&mut transform, &terrain, &mut rng, 1.0);
        }
        assert!((agent.angle - 2.0).abs() < 1e-5);
        let xz = Vec2::new(transform.position.x, transform.position.z);
        assert!((xz.length() - 10.0).abs() < 1e-4);
        assert!(agent.drift.abs() <= agent.drift_max);
    }

    #[test]
    fn zero_displacement_leaves_yaw_unchanged() {
        let terrain = HeightField::default();
        let mut rng = SeededRandom::new(2);
        let (mut agent, mut transform) =
            AgentState::spawn(Species::Gazelle, Vec2::new(5.0, 5.0), test_bounds(), &mut rng);
        // Freeze the orbit entirely.
        agent.angular_speed = 0.0;
        agent.drift_max = 0.0;
        agent.drift = 0.0;

        agent.update(&mut transform, &terrain, &mut rng, 1.0 / 60.0);
        let settled = transform.rotation;
        for _ in 0..20 {
            agent.update(&mut transform, &terrain, &mut rng, 1.0 / 60.0);
        }
        assert_eq!(transform.rotation, settled);
    }
}
