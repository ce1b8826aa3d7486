//! Player vehicle: continuous longitudinal/lateral integrator plus a
//! smoothed third-person chase camera.
//!
//! The controller polls [`InputState`] once per tick; motion is never
//! event-driven. All out-of-range values are clamped every tick, and decay
//! always lands on exactly zero rather than oscillating around it.

use engine_core::Transform;
use glam::{Quat, Vec3};
use input::InputState;

/// Throttle acceleration, m/s^2.
pub const ACCEL: f32 = 6.0;
/// Top forward speed, m/s.
pub const MAX_SPEED: f32 = 16.0;
/// Reverse speed limit as a fraction of the forward limit.
pub const REVERSE_FACTOR: f32 = 0.5;
/// Handbrake deceleration, m/s^2.
pub const BRAKE: f32 = 14.0;
/// Rolling deceleration with no throttle input, m/s^2.
pub const FRICTION: f32 = 4.0;
/// Steering ramp toward full lock, rad/s.
pub const STEER_SPEED: f32 = 2.4;
/// Steering return to center with no input, rad/s.
pub const STEER_DAMP: f32 = 3.5;
/// Full steering lock, radians.
pub const MAX_STEER: f32 = 0.55;
/// Yaw rate at full lock and full turn influence, 1/s.
pub const TURN_RATE: f32 = 1.6;
/// Turn influence floor: the vehicle can pivot in place at zero speed.
const MIN_TURN_INFLUENCE: f32 = 0.35;
/// Fixed ride height. The vehicle does not follow the height field.
pub const RIDE_HEIGHT: f32 = 0.6;

const CAM_MIN_DIST: f32 = 4.0;
const CAM_MAX_DIST: f32 = 18.0;
const CAM_HEIGHT_RATIO: f32 = 0.45;
const CAM_POS_SMOOTH: f32 = 0.08;
const CAM_LOOK_SMOOTH: f32 = 0.15;
const CAM_ZOOM_STEP: f32 = 1.0;
const CAM_LOOK_HEIGHT: f32 = 1.2;

/// Vehicle pose and motion state, owned exclusively by the controller.
#[derive(Debug, Clone, Copy)]
pub struct VehicleState {
    pub position: Vec3,
    pub yaw: f32,
    /// Signed longitudinal speed: positive forward, negative reversing.
    pub velocity: f32,
    /// Current steering angle, radians; positive steers right.
    pub steering: f32,
}

impl VehicleState {
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * -Vec3::Z
    }

    /// Pose for the renderer.
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            rotation: Quat::from_rotation_y(self.yaw),
            ..Default::default()
        }
    }
}

/// Third-person chase camera, exponentially smoothed toward an offset
/// behind and above the vehicle. Never snapped.
#[derive(Debug, Clone, Copy)]
pub struct ChaseCamera {
    pub position: Vec3,
    pub look_target: Vec3,
    /// Zoom target, adjusted by wheel and +/- keys; independent of the
    /// pose smoothing.
    pub desired_distance: f32,
}

impl ChaseCamera {
    fn new(vehicle_position: Vec3, yaw: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            look_target: vehicle_position,
            desired_distance: 9.0,
        };
        // First frame starts on the rig; smoothing tracks from there.
        camera.position = camera.rig_target(vehicle_position, yaw);
        camera
    }

    fn rig_target(&self, vehicle_position: Vec3, yaw: f32) -> Vec3 {
        let local = Vec3::new(
            0.0,
            self.desired_distance * CAM_HEIGHT_RATIO,
            self.desired_distance,
        );
        vehicle_position + Quat::from_rotation_y(yaw) * local
    }

    fn update(&mut self, vehicle_position: Vec3, yaw: f32, zoom_steps: f32) {
        self.desired_distance =
            (self.desired_distance - zoom_steps * CAM_ZOOM_STEP).clamp(CAM_MIN_DIST, CAM_MAX_DIST);

        let position_target = self.rig_target(vehicle_position, yaw);
        let look = vehicle_position + Vec3::Y * CAM_LOOK_HEIGHT;
        self.position = self.position.lerp(position_target, CAM_POS_SMOOTH);
        self.look_target = self.look_target.lerp(look, CAM_LOOK_SMOOTH);
    }
}

/// Player vehicle controller.
pub struct VehicleController {
    pub state: VehicleState,
    pub camera: ChaseCamera,
}

impl VehicleController {
    pub fn new(position: Vec3) -> Self {
        let state = VehicleState {
            position: Vec3::new(position.x, RIDE_HEIGHT, position.z),
            yaw: 0.0,
            velocity: 0.0,
            steering: 0.0,
        };
        Self {
            camera: ChaseCamera::new(state.position, state.yaw),
            state,
        }
    }

    /// Advance one tick from the polled input state.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        let state = &mut self.state;

        // Longitudinal: throttle terms apply in order, so opposing inputs
        // net out with no special-casing.
        if input.is_throttle_forward() {
            state.velocity += ACCEL * dt;
        }
        if input.is_throttle_reverse() {
            state.velocity -= ACCEL * dt;
        }
        if input.is_handbrake() {
            state.velocity = decay_toward_zero(state.velocity, BRAKE * dt);
        } else if !input.is_throttle_forward() && !input.is_throttle_reverse() {
            state.velocity = decay_toward_zero(state.velocity, FRICTION * dt);
        }
        state.velocity = state
            .velocity
            .clamp(-MAX_SPEED * REVERSE_FACTOR, MAX_SPEED);

        // Lateral: ramp toward the held side, spring back to center.
        let steer = input.steer_input();
        if steer != 0.0 {
            state.steering += steer * STEER_SPEED * dt;
        } else {
            state.steering = decay_toward_zero(state.steering, STEER_DAMP * dt);
        }
        state.steering = state.steering.clamp(-MAX_STEER, MAX_STEER);

        state.yaw -= state.steering * turn_influence(state.velocity) * TURN_RATE * dt;

        let forward = state.forward();
        state.position += forward * state.velocity * dt;
        state.position.y = RIDE_HEIGHT;

        let zoom = input.wheel_delta() + input.zoom_key_steps();
        self.camera.update(state.position, state.yaw, zoom);
    }
}

/// Move a value toward zero by `amount`, landing exactly on zero instead of
/// overshooting.
fn decay_toward_zero(value: f32, amount: f32) -> f32 {
    if value > 0.0 {
        (value - amount).max(0.0)
    } else {
        (value + amount).min(0.0)
    }
}

/// Steering-to-yaw coupling: a floor keeps in-place turning possible at
/// zero speed, influence grows with speed, and reversing mirrors the turn
/// direction like a real axle.
fn turn_influence(velocity: f32) -> f32 {
    let direction = if velocity < 0.0 { -1.0 } else { 1.0 };
    direction * (MIN_TURN_INFLUENCE + (1.0 - MIN_TURN_INFLUENCE) * (velocity.abs() / MAX_SPEED).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn held(ids: &[&str]) -> InputState {
        let mut input = InputState::new();
        for id in ids {
            input.process_key_id(id, true);
        }
        input
    }

    /// 3 s of forward throttle at 1/60 s steps: velocity climbs
    /// monotonically and clamps at MAX_SPEED (min(16, 6 * 3) = 16).
    #[test]
    fn sustained_throttle_reaches_exactly_max_speed() {
        let mut controller = VehicleController::new(Vec3::ZERO);
        let input = held(&["w"]);
        let mut previous = 0.0;
        for _ in 0..180 {
            controller.update(&input, DT);
            assert!(controller.state.velocity >= previous);
            assert!(controller.state.velocity <= MAX_SPEED);
            previous = controller.state.velocity;
        }
        assert_eq!(controller.state.velocity, MAX_SPEED);
    }

    #[test]
    fn no_input_decays_to_exactly_zero_without_overshoot() {
        let mut controller = VehicleController::new(Vec3::ZERO);
        controller.state.velocity = 8.0;
        let input = InputState::new();
        for _ in 0..300 {
            controller.update(&input, DT);
            assert!(controller.state.velocity >= 0.0);
        }
        assert_eq!(controller.state.velocity, 0.0);
    }

    #[test]
    fn reverse_clamps_at_reverse_limit() {
        let mut controller = VehicleController::new(Vec3::ZERO);
        let input = held(&["s"]);
        for _ in 0..600 {
            controller.update(&input, DT);
        }
        assert_eq!(controller.state.velocity, -MAX_SPEED * REVERSE_FACTOR);
    }

    #[test]
    fn opposing_throttle_inputs_net_out() {
        let mut controller = VehicleController::new(Vec3::ZERO);
        let input = held(&["w", "s"]);
        for _ in 0..120 {
            controller.update(&input, DT);
        }
        assert_eq!(controller.state.velocity, 0.0);
    }

    #[test]
    fn handbrake_stops_faster_than_rolling_friction() {
        let mut braking = VehicleController::new(Vec3::ZERO);
        braking.state.velocity = 10.0;
        braking.update(&held(&["shift"]), DT);

        let mut rolling = VehicleController::new(Vec3::ZERO);
        rolling.state.velocity = 10.0;
        rolling.update(&InputState::new(), DT);

        assert!(braking.state.velocity < rolling.state.velocity);
    }

    #[test]
    fn steering_clamps_and_springs_back_to_zero() {
        let mut controller = VehicleController::new(Vec3::ZERO);
        let right = held(&["d"]);
        for _ in 0..120 {
            controller.update(&right, DT);
            assert!(controller.state.steering.abs() <= MAX_STEER);
        }
        assert_eq!(controller.state.steering, MAX_STEER);

        let idle = InputState::new();
        for _ in 0..120 {
            controller.update(&idle, DT);
        }
        assert_eq!(controller.state.steering, 0.0);
    }

    #[test]
    fn vehicle_can_pivot_in_place() {
        let mut controller = VehicleController::new(Vec3::ZERO);
        let input = held(&["a"]);
        for _ in 0..60 {
            controller.update(&input, DT);
        }
        assert_eq!(controller.state.velocity, 0.0);
        assert!(controller.state.yaw != 0.0);
    }

    #[test]
    fn ride_height_is_pinned() {
        let mut controller = VehicleController::new(Vec3::new(4.0, 99.0, -7.0));
        let input = held(&["w"]);
        for _ in 0..240 {
            controller.update(&input, DT);
            assert_eq!(controller.state.position.y, RIDE_HEIGHT);
        }
        // And the vehicle actually traveled.
        assert!(controller.state.position.distance(Vec3::new(4.0, RIDE_HEIGHT, -7.0)) > 1.0);
    }

    #[test]
    fn camera_closes_on_its_rig_without_snapping() {
        let mut controller = VehicleController::new(Vec3::ZERO);
        // Knock the camera off its rig while the vehicle sits still.
        controller.camera.position += Vec3::new(5.0, 2.0, -4.0);

        let idle = InputState::new();
        let target = controller
            .camera
            .rig_target(controller.state.position, controller.state.yaw);
        let mut gap = controller.camera.position.distance(target);
        for _ in 0..60 {
            controller.update(&idle, DT);
            let next_gap = controller.camera.position.distance(target);
            // Each tick closes part of the gap, never all of it.
            assert!(next_gap < gap);
            assert!(next_gap > 0.0);
            gap = next_gap;
        }
        assert!(gap < 0.5);
    }

    #[test]
    fn zoom_clamps_to_distance_bounds() {
        let mut controller = VehicleController::new(Vec3::ZERO);
        let mut input = InputState::new();
        for _ in 0..100 {
            input.process_wheel(1.0);
            input.begin_frame();
            controller.update(&input, DT);
        }
        assert_eq!(controller.camera.desired_distance, CAM_MIN_DIST);

        for _ in 0..100 {
            input.process_wheel(-1.0);
            input.begin_frame();
            controller.update(&input, DT);
        }
        assert_eq!(controller.camera.desired_distance, CAM_MAX_DIST);
    }
}
