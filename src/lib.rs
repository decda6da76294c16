//! Kinetic
//!
//! A small 3D game scaffold built with winit and wgpu. Its core is a
//! frame-based input tracker: named actions, per-frame press/release edges
//! and accumulated pointer and wheel deltas.

/// Game application - windowing, rendering, and per-frame control flow
pub mod app;

/// Build-time information (version, target, rustc, timestamp)
pub mod build_info;

/// Layered application configuration
pub mod config;

/// Startup and environment health checks
pub mod health;

/// Input mapping and per-frame input state
pub mod input;

/// Console log formatting and subscriber setup
pub mod logging;

/// Flat key/value user settings persisted as a properties file
pub mod settings;

/// Game simulation - world state, objects, and the camera
pub mod sim;
