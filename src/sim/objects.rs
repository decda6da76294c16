//! Concrete game objects

use std::any::Any;

use glam::Vec3;

use super::GameObject;
use super::transform::Transform;

/// Downward acceleration applied to airborne avatars, in units/s²
pub const GRAVITY: f32 = 9.81;

/// A box drifting at constant velocity while spinning about a fixed axis
#[derive(Debug, Clone)]
pub struct SpinningBox {
    name: String,
    transform: Transform,
    velocity: Vec3,
    spin_axis: Vec3,
    /// Radians per second
    spin_rate: f32,
    spinning: bool,
    color: [f32; 3],
}

impl SpinningBox {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            transform: Transform::from_position(position),
            velocity: Vec3::ZERO,
            spin_axis: Vec3::new(1.0, 1.0, 0.0).normalize(),
            spin_rate: 1.0,
            spinning: true,
            color: [1.0, 1.0, 1.0],
        }
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Sets the spin axis; a zero axis stops rotation
    pub fn with_spin(mut self, axis: Vec3, rate: f32) -> Self {
        self.spin_axis = axis.normalize_or_zero();
        self.spin_rate = rate;
        self
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn toggle_spin(&mut self) {
        self.spinning = !self.spinning;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }
}

impl GameObject for SpinningBox {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, delta_time: f32) {
        self.transform.integrate(self.velocity, delta_time);

        if self.spinning && self.spin_axis != Vec3::ZERO {
            self.transform
                .rotate(self.spin_axis, self.spin_rate * delta_time);
        }
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn color(&self) -> [f32; 3] {
        self.color
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The player-controlled body
///
/// Moves on the ground plane at a fixed speed in the direction of the last
/// move input. Jumps follow a ballistic arc back to `ground_height`.
#[derive(Debug, Clone)]
pub struct Avatar {
    name: String,
    transform: Transform,
    velocity: Vec3,
    /// Units per second
    speed: f32,
    jump_speed: f32,
    vertical_velocity: f32,
    ground_height: f32,
}

impl Avatar {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            transform: Transform::from_position(position).with_scale(0.4),
            velocity: Vec3::ZERO,
            speed: 3.0,
            jump_speed: 4.0,
            vertical_velocity: 0.0,
            ground_height: position.y,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the horizontal move direction; magnitude is ignored
    pub fn set_move_input(&mut self, direction: Vec3) {
        let flat = Vec3::new(direction.x, 0.0, direction.z);
        self.velocity = flat.normalize_or_zero() * self.speed;
    }

    /// Starts a jump if standing on the ground
    pub fn jump(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.vertical_velocity = self.jump_speed;
        true
    }

    pub fn is_grounded(&self) -> bool {
        self.transform.position.y <= self.ground_height && self.vertical_velocity <= 0.0
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }
}

impl GameObject for Avatar {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, delta_time: f32) {
        let velocity = self.velocity + Vec3::Y * self.vertical_velocity;
        self.transform.integrate(velocity, delta_time);

        if self.vertical_velocity != 0.0 || self.transform.position.y > self.ground_height {
            self.vertical_velocity -= GRAVITY * delta_time;
        }

        if self.transform.position.y <= self.ground_height {
            self.transform.position.y = self.ground_height;
            self.vertical_velocity = 0.0;
        }
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn color(&self) -> [f32; 3] {
        [0.95, 0.55, 0.15]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_drifts_linearly() {
        let mut cube = SpinningBox::new("cube", Vec3::ZERO);
        cube.set_velocity(Vec3::new(0.0, 2.0, 0.0));
        cube.tick(0.5);
        cube.tick(0.5);
        assert!(cube.transform().position.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-6));
    }

    #[test]
    fn test_box_spin_toggle() {
        let mut cube = SpinningBox::new("cube", Vec3::ZERO).with_spin(Vec3::Y, 1.0);
        cube.tick(0.1);
        let rotated = cube.transform().rotation;
        assert_ne!(rotated, glam::Quat::IDENTITY);

        cube.toggle_spin();
        cube.tick(0.1);
        assert_eq!(cube.transform().rotation, rotated);
        assert!(!cube.is_spinning());
    }

    #[test]
    fn test_zero_spin_axis_does_not_rotate() {
        let mut cube = SpinningBox::new("cube", Vec3::ZERO).with_spin(Vec3::ZERO, 5.0);
        cube.tick(1.0);
        assert_eq!(cube.transform().rotation, glam::Quat::IDENTITY);
    }

    #[test]
    fn test_avatar_moves_at_fixed_speed() {
        let mut avatar = Avatar::new("p", Vec3::ZERO).with_speed(2.0);
        avatar.set_move_input(Vec3::new(10.0, 5.0, 0.0));
        assert!(avatar.velocity().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));

        avatar.tick(0.5);
        assert!(avatar.transform().position.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));

        avatar.set_move_input(Vec3::ZERO);
        avatar.tick(0.5);
        assert!(avatar.transform().position.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_avatar_jump_lands_on_ground() {
        let mut avatar = Avatar::new("p", Vec3::ZERO);
        assert!(avatar.jump());
        assert!(!avatar.jump());

        avatar.tick(0.1);
        assert!(avatar.transform().position.y > 0.0);
        assert!(!avatar.is_grounded());

        for _ in 0..100 {
            avatar.tick(0.05);
        }
        assert_eq!(avatar.transform().position.y, 0.0);
        assert!(avatar.is_grounded());
        assert!(avatar.jump());
    }
}
