//! Raw input collection from winit events

use std::collections::HashSet;

use tracing::{debug, trace};
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::bindings::{AxisTrigger, InputMap, PhysicalInput};
use super::tracker::InputTracker;

/// Pixels per wheel line, used to normalise pixel-precise scrolling
const PIXELS_PER_LINE: f32 = 20.0;

/// Translates winit events through a binding table into tracker events
///
/// Remembers which physical inputs are down, so an action bound to several
/// inputs stays held until the last of them is released.
#[derive(Debug, Clone)]
pub struct InputCollector {
    bindings: InputMap,
    held_inputs: HashSet<PhysicalInput>,
}

impl InputCollector {
    /// Creates a collector with the given binding table
    pub fn new(bindings: InputMap) -> Self {
        Self {
            bindings,
            held_inputs: HashSet::new(),
        }
    }

    pub fn bindings(&self) -> &InputMap {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut InputMap {
        &mut self.bindings
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent, tracker: &mut InputTracker) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                // OS key-repeat would otherwise produce a press edge every few frames
                if event.repeat {
                    return;
                }

                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_physical(code.into(), event.state.is_pressed(), tracker);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = *state == ElementState::Pressed;
                self.handle_physical((*button).into(), pressed, tracker);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_wheel(*delta, tracker);
            }

            WindowEvent::Focused(false) => {
                debug!("Window lost focus, releasing held actions");
                self.held_inputs.clear();
                tracker.on_focus_lost();
            }

            _ => {}
        }
    }

    /// Handle a winit device event (raw, unaccelerated mouse motion)
    pub fn handle_device_event(&mut self, event: &DeviceEvent, tracker: &mut InputTracker) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.handle_pointer_motion(delta.0 as f32, delta.1 as f32, tracker);
        }
    }

    /// Forwards a key/button transition to every action bound to `input`
    ///
    /// An action sees a press when its first bound input goes down and a
    /// release when its last bound input comes up. Repeated presses of an
    /// input that is already down are ignored.
    pub fn handle_physical(
        &mut self,
        input: PhysicalInput,
        pressed: bool,
        tracker: &mut InputTracker,
    ) {
        let actions = self.bindings.actions_for(input);
        if actions.is_empty() {
            trace!(?input, pressed, "Unbound input");
            return;
        }

        let changed = if pressed {
            self.held_inputs.insert(input)
        } else {
            self.held_inputs.remove(&input)
        };
        if !changed {
            trace!(?input, pressed, "Input already in this state");
            return;
        }

        for action in actions {
            if !self.held_elsewhere(action, input) {
                tracker.on_discrete_event(action, pressed);
            }
        }
    }

    /// Whether a held input other than `except` drives `action`
    fn held_elsewhere(&self, action: &str, except: PhysicalInput) -> bool {
        self.held_inputs.iter().any(|&held| {
            held != except
                && self
                    .bindings
                    .actions_for(held)
                    .iter()
                    .any(|bound| bound == action)
        })
    }

    /// Splits a pointer motion sample into directional channels
    ///
    /// `dy` follows window coordinates (down is positive); the pointer Y
    /// channels treat up as positive.
    pub fn handle_pointer_motion(&self, dx: f32, dy: f32, tracker: &mut InputTracker) {
        if dx != 0.0 {
            self.emit_axis(AxisTrigger::PointerX { negative: dx < 0.0 }, dx.abs(), tracker);
        }

        if dy != 0.0 {
            self.emit_axis(AxisTrigger::PointerY { negative: dy > 0.0 }, dy.abs(), tracker);
        }
    }

    /// Converts a wheel delta into line units on the wheel channels
    pub fn handle_wheel(&self, delta: MouseScrollDelta, tracker: &mut InputTracker) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
        };

        if lines != 0.0 {
            self.emit_axis(AxisTrigger::Wheel { negative: lines < 0.0 }, lines.abs(), tracker);
        }
    }

    fn emit_axis(&self, trigger: AxisTrigger, magnitude: f32, tracker: &mut InputTracker) {
        if let Some(axis) = self.bindings.axis_for(trigger) {
            tracker.on_axis(axis, magnitude);
        }
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new(InputMap::with_defaults())
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalPosition;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    use super::*;
    use crate::input::action::actions;

    #[test]
    fn test_bound_key_drives_action() {
        let mut collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_physical(KeyCode::KeyW.into(), true, &mut tracker);
        assert!(tracker.is_held(actions::MOVE_FORWARD));
        assert!(tracker.is_pressed_this_frame(actions::MOVE_FORWARD));

        collector.handle_physical(KeyCode::KeyW.into(), false, &mut tracker);
        assert!(!tracker.is_held(actions::MOVE_FORWARD));
        assert!(tracker.is_released_this_frame(actions::MOVE_FORWARD));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_physical(KeyCode::KeyQ.into(), true, &mut tracker);
        assert!(tracker.is_frame_empty());
        assert_eq!(tracker.held_actions().count(), 0);
    }

    #[test]
    fn test_action_stays_held_while_any_bound_key_is_down() {
        let mut collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_physical(KeyCode::KeyW.into(), true, &mut tracker);
        collector.handle_physical(KeyCode::ArrowUp.into(), true, &mut tracker);
        tracker.begin_frame();

        collector.handle_physical(KeyCode::ArrowUp.into(), false, &mut tracker);
        assert!(tracker.is_held(actions::MOVE_FORWARD));
        assert!(!tracker.is_released_this_frame(actions::MOVE_FORWARD));

        collector.handle_physical(KeyCode::KeyW.into(), false, &mut tracker);
        assert!(!tracker.is_held(actions::MOVE_FORWARD));
        assert!(tracker.is_released_this_frame(actions::MOVE_FORWARD));
    }

    #[test]
    fn test_second_bound_key_adds_no_press_edge() {
        let mut collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_physical(KeyCode::KeyA.into(), true, &mut tracker);
        tracker.begin_frame();
        collector.handle_physical(KeyCode::ArrowLeft.into(), true, &mut tracker);

        assert!(tracker.is_held(actions::MOVE_LEFT));
        assert!(!tracker.is_pressed_this_frame(actions::MOVE_LEFT));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_physical(KeyCode::Space.into(), false, &mut tracker);
        assert!(tracker.is_frame_empty());
    }

    #[test]
    fn test_focus_loss_forgets_held_keys() {
        let mut collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_physical(KeyCode::KeyS.into(), true, &mut tracker);
        collector.handle_window_event(&WindowEvent::Focused(false), &mut tracker);
        tracker.begin_frame();

        // The key comes back down after focus returns: a fresh press
        collector.handle_physical(KeyCode::KeyS.into(), true, &mut tracker);
        assert!(tracker.is_pressed_this_frame(actions::MOVE_BACKWARD));
    }

    #[test]
    fn test_mouse_button_drives_action() {
        let mut collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_physical(MouseButton::Right.into(), true, &mut tracker);
        assert!(tracker.is_held(actions::MOUSE_RIGHT));
    }

    #[test]
    fn test_pointer_motion_is_signed() {
        let collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_pointer_motion(5.0, 2.0, &mut tracker);
        collector.handle_pointer_motion(-1.0, -6.0, &mut tracker);

        // Window Y grows downward, pointer Y grows upward
        assert_eq!(tracker.pointer_delta().x, 4.0);
        assert_eq!(tracker.pointer_delta().y, 4.0);
    }

    #[test]
    fn test_wheel_lines_and_pixels() {
        let collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_wheel(MouseScrollDelta::LineDelta(0.0, 2.0), &mut tracker);
        collector.handle_wheel(
            MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -20.0)),
            &mut tracker,
        );

        assert_eq!(tracker.wheel_delta(), 1.0);
    }

    #[test]
    fn test_focus_loss_releases_held_actions() {
        let mut collector = InputCollector::default();
        let mut tracker = InputTracker::new();

        collector.handle_physical(KeyCode::KeyD.into(), true, &mut tracker);
        tracker.begin_frame();
        collector.handle_window_event(&WindowEvent::Focused(false), &mut tracker);

        assert!(!tracker.is_held(actions::MOVE_RIGHT));
        assert!(tracker.is_released_this_frame(actions::MOVE_RIGHT));
    }

    #[test]
    fn test_unbound_axis_trigger_is_dropped() {
        let collector = InputCollector::new(InputMap::new());
        let mut tracker = InputTracker::new();

        collector.handle_pointer_motion(3.0, 3.0, &mut tracker);
        collector.handle_wheel(MouseScrollDelta::LineDelta(0.0, 1.0), &mut tracker);

        assert!(tracker.is_frame_empty());
    }
}
