//! Game simulation module
//!
//! Handles world state and the game objects that live in it.

pub mod camera;
pub mod objects;
pub mod transform;

use std::any::Any;

use glam::Vec3;

pub use camera::OrbitCamera;
pub use objects::{Avatar, SpinningBox};
pub use transform::Transform;

/// Trait that all game objects must implement
///
/// The World owns its objects as trait objects and ticks them in insertion
/// order. Object-specific methods are reached through downcasting.
pub trait GameObject {
    /// Unique name used for lookups
    fn name(&self) -> &str;

    /// Advances the object by `delta_time` seconds
    fn tick(&mut self, delta_time: f32);

    /// Placement in world space
    fn transform(&self) -> &Transform;

    /// Base colour used by the renderer
    fn color(&self) -> [f32; 3];

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Game world state
pub struct World {
    /// Total number of simulation ticks elapsed
    tick_count: u64,
    /// Total simulation time elapsed in seconds
    sim_time: f64,
    /// Time scale multiplier (1.0 = normal speed, 0.0 = frozen, 2.0 = 2x speed)
    time_scale: f32,
    /// Whether the simulation is paused
    paused: bool,
    objects: Vec<Box<dyn GameObject>>,
}

impl World {
    /// Name of the spinning box in [`World::demo`]
    pub const BOX: &'static str = "box";
    /// Name of the player avatar in [`World::demo`]
    pub const PLAYER: &'static str = "player";

    /// Creates an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo scene: a spinning box at the origin and a player beside it
    pub fn demo() -> Self {
        let mut world = Self::new();

        world.add_object(Box::new(
            SpinningBox::new(Self::BOX, Vec3::ZERO).with_color([0.2, 0.45, 0.9]),
        ));
        world.add_object(Box::new(Avatar::new(Self::PLAYER, Vec3::new(0.0, 0.0, 3.0))));

        world
    }

    /// Builder method to set the time scale
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale.max(0.0);
        self
    }

    /// Builder method to set the paused state
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Updates the world by one tick
    pub fn tick(&mut self, delta_time: f32) {
        if self.paused {
            return;
        }

        let scaled_delta = delta_time * self.time_scale;
        self.tick_count += 1;
        self.sim_time += scaled_delta as f64;

        for object in &mut self.objects {
            object.tick(scaled_delta);
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the total simulation time in seconds
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Sets the time scale multiplier; negative values clamp to zero
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Adds an object; it is ticked after every object added before it
    pub fn add_object(&mut self, object: Box<dyn GameObject>) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[Box<dyn GameObject>] {
        &self.objects
    }

    /// Gets an object by name
    pub fn get(&self, name: &str) -> Option<&dyn GameObject> {
        self.objects
            .iter()
            .find(|o| o.name() == name)
            .map(|o| o.as_ref())
    }

    /// Gets a typed reference to an object
    ///
    /// # Example
    /// ```ignore
    /// if let Some(cube) = world.get_typed::<SpinningBox>(World::BOX) {
    ///     println!("spinning: {}", cube.is_spinning());
    /// }
    /// ```
    pub fn get_typed<T: 'static>(&self, name: &str) -> Option<&T> {
        self.get(name).and_then(|o| o.as_any().downcast_ref::<T>())
    }

    /// Gets a mutable typed reference to an object
    pub fn get_typed_mut<T: 'static>(&mut self, name: &str) -> Option<&mut T> {
        self.objects
            .iter_mut()
            .find(|o| o.name() == name)
            .and_then(|o| o.as_any_mut().downcast_mut::<T>())
    }
}

impl Default for World {
    fn default() -> Self {
        Self {
            tick_count: 0,
            sim_time: 0.0,
            time_scale: 1.0,
            paused: false,
            objects: Vec::new(),
        }
    }
}
