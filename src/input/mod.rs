//! Input handling system
//!
//! Turns raw winit events into named actions and per-frame state:
//! - Physical keys and buttons are mapped to action names by an [`InputMap`]
//! - Pointer and wheel motion are split into signed axis channels
//! - The [`InputTracker`] answers "held", "pressed this frame" and
//!   "released this frame", and accumulates pointer/wheel deltas
//!
//! # Architecture
//!
//! ```text
//! Raw Input (winit) → InputCollector ──(InputMap)──→ InputTracker
//!                                                        ↓
//!                                                  game logic queries
//!                                                        ↓
//!                                                  begin_frame()
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut input = InputSystem::new();
//! input.register_mapping("CROUCH", KeyCode::KeyC);
//!
//! // In window_event() / device_event()
//! input.handle_window_event(&event);
//!
//! // Each tick: read, then reset for the next frame's events
//! if input.tracker().is_pressed_this_frame(actions::JUMP) { /* ... */ }
//! input.begin_frame();
//! ```

mod action;
mod bindings;
mod collector;
mod system;
mod tracker;

pub use action::{Axis, actions};
pub use bindings::{AxisTrigger, InputMap, PhysicalInput};
pub use collector::InputCollector;
pub use system::InputSystem;
pub use tracker::InputTracker;
