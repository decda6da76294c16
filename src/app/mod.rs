//! Game application module
//!
//! Owns the window and renderer, feeds winit events into the input system and
//! drives the per-frame update.

pub mod controls;
pub mod renderer;
mod runner;
mod window;

pub use controls::{ControlOutcome, PlayerControls};
pub use runner::App;
pub use window::window_attributes_from_config;
