//! Input system: binding table plus frame tracker

use tracing::{debug, info};
use winit::event::{DeviceEvent, WindowEvent};

use super::bindings::{InputMap, PhysicalInput};
use super::collector::InputCollector;
use super::tracker::InputTracker;

/// Owns the input backend and the tracker it feeds
///
/// Constructed once at startup. The event loop forwards winit events here and
/// calls [`begin_frame`](Self::begin_frame) once per tick after game logic
/// has read the tracker.
#[derive(Debug, Clone, Default)]
pub struct InputSystem {
    collector: InputCollector,
    tracker: InputTracker,
}

impl InputSystem {
    /// Creates the system with the default binding table
    pub fn new() -> Self {
        Self::with_bindings(InputMap::with_defaults())
    }

    /// Creates the system with a custom binding table
    pub fn with_bindings(bindings: InputMap) -> Self {
        info!(
            bindings = bindings.binding_count(),
            "Input system initialised"
        );

        Self {
            collector: InputCollector::new(bindings),
            tracker: InputTracker::new(),
        }
    }

    /// Binds another physical input to `action`
    ///
    /// Events from `input` reach the tracker from the next event onwards.
    pub fn register_mapping(&mut self, action: &str, input: impl Into<PhysicalInput>) {
        let input = input.into();
        if self.collector.bindings_mut().bind(action, input) {
            debug!(action, ?input, "Registered input mapping");
        } else {
            debug!(action, ?input, "Input mapping already registered");
        }
    }

    /// Clears per-frame edges and deltas
    pub fn begin_frame(&mut self) {
        self.tracker.begin_frame();
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        self.collector.handle_window_event(event, &mut self.tracker);
    }

    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        self.collector.handle_device_event(event, &mut self.tracker);
    }

    /// Feeds a key/button transition without a winit event
    pub fn handle_physical(&mut self, input: impl Into<PhysicalInput>, pressed: bool) {
        self.collector.handle_physical(input.into(), pressed, &mut self.tracker);
    }

    /// Feeds raw pointer motion in window coordinates (down is positive)
    pub fn handle_pointer_motion(&mut self, dx: f32, dy: f32) {
        self.collector.handle_pointer_motion(dx, dy, &mut self.tracker);
    }

    /// Read-only view for game logic
    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    /// Mutable access, for feeding synthetic events
    pub fn tracker_mut(&mut self) -> &mut InputTracker {
        &mut self.tracker
    }

    pub fn collector(&self) -> &InputCollector {
        &self.collector
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::KeyCode;

    use super::*;

    #[test]
    fn test_register_mapping_routes_new_input() {
        let mut input = InputSystem::new();
        input.register_mapping("CROUCH", KeyCode::KeyC);

        input.handle_physical(KeyCode::KeyC, true);
        assert!(input.tracker().is_pressed_this_frame("CROUCH"));
    }

    #[test]
    fn test_register_mapping_extends_existing_input() {
        let mut input = InputSystem::new();
        input.register_mapping("SPRINT", KeyCode::KeyW);

        input.handle_physical(KeyCode::KeyW, true);

        assert!(input.tracker().is_held("SPRINT"));
        assert!(input.tracker().is_held("MOVE_FORWARD"));
    }

    #[test]
    fn test_begin_frame_resets_tracker_edges() {
        let mut input = InputSystem::new();
        input.tracker_mut().on_discrete_event("JUMP", true);
        input.begin_frame();

        assert!(input.tracker().is_held("JUMP"));
        assert!(!input.tracker().is_pressed_this_frame("JUMP"));
    }
}
