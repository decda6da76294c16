//! Orbit camera looking at a target point

use glam::{Mat4, Vec2, Vec3};

const MIN_PITCH: f32 = -1.4;
const MAX_PITCH: f32 = 1.4;
const MIN_DISTANCE: f32 = 1.5;
const MAX_DISTANCE: f32 = 40.0;
/// Distance multiplier per wheel line
const ZOOM_STEP: f32 = 0.9;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// Camera orbiting `target` at `distance`
///
/// Yaw 0 places the eye on the target's +Z side; positive pitch raises it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl OrbitCamera {
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            yaw: 0.0,
            pitch: 0.35,
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
        }
    }

    /// Rotates around the target; `delta` is in radians (x = yaw, y = pitch)
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x;
        self.pitch = (self.pitch + delta.y).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Moves closer for positive `steps`, further for negative
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * ZOOM_STEP.powf(steps)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Eye position in world space
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.target + offset * self.distance
    }

    /// Horizontal viewing direction (unit length, y = 0)
    pub fn forward_flat(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal right vector (unit length, y = 0)
    pub fn right_flat(&self) -> Vec3 {
        self.forward_flat().cross(Vec3::Y)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Combined projection and view for the given aspect ratio and vertical FOV
    pub fn view_proj(&self, aspect: f32, fov_degrees: f32) -> Mat4 {
        let projection =
            Mat4::perspective_rh(fov_degrees.to_radians(), aspect, NEAR_PLANE, FAR_PLANE);
        projection * self.view()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 6.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_at_distance_from_target() {
        let camera = OrbitCamera::new(Vec3::new(1.0, 0.0, 0.0), 5.0);
        assert!((camera.eye().distance(camera.target) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_flat_axes_are_orthonormal() {
        let mut camera = OrbitCamera::default();
        camera.orbit(Vec2::new(0.7, 0.2));

        let forward = camera.forward_flat();
        let right = camera.right_flat();
        assert!((forward.length() - 1.0).abs() < 1e-5);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!(forward.dot(right).abs() < 1e-5);
        assert_eq!(forward.y, 0.0);
    }

    #[test]
    fn test_default_forward_looks_down_negative_z() {
        let camera = OrbitCamera::default();
        assert!(camera.forward_flat().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(camera.right_flat().abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.orbit(Vec2::new(0.0, 10.0));
        assert_eq!(camera.pitch(), MAX_PITCH);
        camera.orbit(Vec2::new(0.0, -20.0));
        assert_eq!(camera.pitch(), MIN_PITCH);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = OrbitCamera::new(Vec3::ZERO, 10.0);
        camera.zoom(1.0);
        assert!((camera.distance() - 9.0).abs() < 1e-5);

        camera.zoom(100.0);
        assert_eq!(camera.distance(), MIN_DISTANCE);
        camera.zoom(-100.0);
        assert_eq!(camera.distance(), MAX_DISTANCE);
    }

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = OrbitCamera::new(Vec3::new(2.0, 1.0, -3.0), 6.0);
        let clip = camera.view_proj(16.0 / 9.0, 60.0) * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
