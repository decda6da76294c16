//! Maps per-frame input state onto the demo scene

use glam::{Vec2, Vec3};
use tracing::debug;

use crate::config::InputConfig;
use crate::input::{InputTracker, actions};
use crate::sim::{Avatar, GameObject, OrbitCamera, SpinningBox, World};

/// What the frame's input asked of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlOutcome {
    pub exit_requested: bool,
}

/// Player control scheme for the demo scene
#[derive(Debug, Clone)]
pub struct PlayerControls {
    sensitivity: f32,
    invert_y: bool,
}

impl PlayerControls {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            sensitivity: config.mouse_sensitivity,
            invert_y: config.invert_y,
        }
    }

    /// Applies this frame's input
    ///
    /// Must run after the frame's events were delivered and before the
    /// tracker's next `begin_frame()`.
    pub fn apply(
        &self,
        input: &InputTracker,
        world: &mut World,
        camera: &mut OrbitCamera,
    ) -> ControlOutcome {
        if input.is_held(actions::MOUSE_RIGHT) {
            let delta = input.pointer_delta();
            if delta != Vec2::ZERO {
                let pitch = if self.invert_y { -delta.y } else { delta.y };
                camera.orbit(Vec2::new(delta.x, pitch) * self.sensitivity);
            }
        }

        let wheel = input.wheel_delta();
        if wheel != 0.0 {
            camera.zoom(wheel);
        }

        if input.is_pressed_this_frame(actions::MOUSE_LEFT)
            && let Some(cube) = world.get_typed_mut::<SpinningBox>(World::BOX)
        {
            cube.toggle_spin();
            debug!(spinning = cube.is_spinning(), "Toggled box spin");
        }

        if let Some(player) = world.get_typed_mut::<Avatar>(World::PLAYER) {
            player.set_move_input(Self::move_direction(input, camera));

            if input.is_pressed_this_frame(actions::JUMP) && player.jump() {
                debug!("Player jumped");
            }

            camera.target = player.transform().position;
        }

        ControlOutcome {
            exit_requested: input.is_pressed_this_frame(actions::EXIT),
        }
    }

    /// Camera-relative direction on the ground plane from held movement actions
    fn move_direction(input: &InputTracker, camera: &OrbitCamera) -> Vec3 {
        let axis = |positive: &str, negative: &str| {
            input.is_held(positive) as i32 as f32 - input.is_held(negative) as i32 as f32
        };

        let forward = axis(actions::MOVE_FORWARD, actions::MOVE_BACKWARD);
        let right = axis(actions::MOVE_RIGHT, actions::MOVE_LEFT);

        camera.forward_flat() * forward + camera.right_flat() * right
    }
}

impl Default for PlayerControls {
    fn default() -> Self {
        Self {
            sensitivity: 0.005,
            invert_y: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Axis;

    fn scene() -> (World, OrbitCamera) {
        (World::demo(), OrbitCamera::default())
    }

    #[test]
    fn test_idle_frame_changes_nothing() {
        let (mut world, mut camera) = scene();
        let before = camera.clone();

        let tracker = InputTracker::new();
        let outcome = PlayerControls::default().apply(&tracker, &mut world, &mut camera);

        assert_eq!(outcome, ControlOutcome::default());
        assert_eq!(camera.yaw(), before.yaw());
        assert_eq!(camera.distance(), before.distance());
        let player = world.get_typed::<Avatar>(World::PLAYER).unwrap();
        assert_eq!(player.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_forward_moves_along_camera_view() {
        let (mut world, mut camera) = scene();
        let mut input = InputTracker::new();
        input.on_discrete_event(actions::MOVE_FORWARD, true);

        PlayerControls::default().apply(&input, &mut world, &mut camera);

        let player = world.get_typed::<Avatar>(World::PLAYER).unwrap();
        assert!(player.velocity().normalize().abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let (mut world, mut camera) = scene();
        let mut input = InputTracker::new();
        input.on_discrete_event(actions::MOVE_LEFT, true);
        input.on_discrete_event(actions::MOVE_RIGHT, true);

        PlayerControls::default().apply(&input, &mut world, &mut camera);

        let player = world.get_typed::<Avatar>(World::PLAYER).unwrap();
        assert_eq!(player.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_left_click_toggles_spin_once_per_press() {
        let (mut world, mut camera) = scene();
        let controls = PlayerControls::default();
        let mut input = InputTracker::new();

        input.on_discrete_event(actions::MOUSE_LEFT, true);
        controls.apply(&input, &mut world, &mut camera);
        assert!(!world.get_typed::<SpinningBox>(World::BOX).unwrap().is_spinning());

        // Still held next frame, but no new press edge
        input.begin_frame();
        controls.apply(&input, &mut world, &mut camera);
        assert!(!world.get_typed::<SpinningBox>(World::BOX).unwrap().is_spinning());
    }

    #[test]
    fn test_orbit_requires_right_button() {
        let (mut world, mut camera) = scene();
        let controls = PlayerControls::default();
        let mut input = InputTracker::new();

        input.on_axis(Axis::PointerX, 100.0);
        controls.apply(&input, &mut world, &mut camera);
        assert_eq!(camera.yaw(), 0.0);

        input.on_discrete_event(actions::MOUSE_RIGHT, true);
        controls.apply(&input, &mut world, &mut camera);
        assert!((camera.yaw() + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_invert_y_flips_pitch() {
        let config = InputConfig {
            mouse_sensitivity: 0.01,
            invert_y: true,
        };
        let (mut world, mut camera) = scene();
        let pitch = camera.pitch();
        let mut input = InputTracker::new();
        input.on_discrete_event(actions::MOUSE_RIGHT, true);
        input.on_axis(Axis::PointerY, 10.0);

        PlayerControls::new(&config).apply(&input, &mut world, &mut camera);

        assert!((camera.pitch() - (pitch - 0.1)).abs() < 1e-5);
    }

    #[test]
    fn test_wheel_zooms() {
        let (mut world, mut camera) = scene();
        let distance = camera.distance();
        let mut input = InputTracker::new();
        input.on_axis(Axis::Wheel, 1.0);

        PlayerControls::default().apply(&input, &mut world, &mut camera);

        assert!(camera.distance() < distance);
    }

    #[test]
    fn test_exit_on_press_edge_only() {
        let (mut world, mut camera) = scene();
        let controls = PlayerControls::default();
        let mut input = InputTracker::new();

        input.on_discrete_event(actions::EXIT, true);
        assert!(controls.apply(&input, &mut world, &mut camera).exit_requested);

        input.begin_frame();
        assert!(!controls.apply(&input, &mut world, &mut camera).exit_requested);
    }

    #[test]
    fn test_camera_follows_player() {
        let (mut world, mut camera) = scene();
        PlayerControls::default().apply(&InputTracker::new(), &mut world, &mut camera);

        let player = world.get(World::PLAYER).unwrap();
        assert_eq!(camera.target, player.transform().position);
    }
}
