//! Binding table from physical inputs to action names and axis channels

use std::collections::HashMap;

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::action::{Axis, actions};

/// A physical key or button that can drive an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalInput {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl From<KeyCode> for PhysicalInput {
    fn from(key: KeyCode) -> Self {
        PhysicalInput::Key(key)
    }
}

impl From<MouseButton> for PhysicalInput {
    fn from(button: MouseButton) -> Self {
        PhysicalInput::Mouse(button)
    }
}

/// A directional source of continuous motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisTrigger {
    /// Pointer motion along X; `negative` selects leftward motion
    PointerX { negative: bool },
    /// Pointer motion along Y; `negative` selects downward motion
    PointerY { negative: bool },
    /// Wheel motion; `negative` selects scrolling down
    Wheel { negative: bool },
}

/// Binding table consulted by the input backend
///
/// One physical input may drive several actions. Axis triggers map to exactly
/// one channel.
#[derive(Debug, Clone, Default)]
pub struct InputMap {
    actions: HashMap<PhysicalInput, Vec<String>>,
    axes: HashMap<AxisTrigger, Axis>,
}

impl InputMap {
    /// Creates an empty binding table
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table with the default movement, mouse and axis bindings
    pub fn with_defaults() -> Self {
        let mut map = Self::new();

        let keys = [
            (KeyCode::KeyW, actions::MOVE_FORWARD),
            (KeyCode::ArrowUp, actions::MOVE_FORWARD),
            (KeyCode::KeyS, actions::MOVE_BACKWARD),
            (KeyCode::ArrowDown, actions::MOVE_BACKWARD),
            (KeyCode::KeyA, actions::MOVE_LEFT),
            (KeyCode::ArrowLeft, actions::MOVE_LEFT),
            (KeyCode::KeyD, actions::MOVE_RIGHT),
            (KeyCode::ArrowRight, actions::MOVE_RIGHT),
            (KeyCode::Space, actions::JUMP),
            (KeyCode::Escape, actions::EXIT),
        ];
        for (key, action) in keys {
            map.bind(action, key);
        }

        map.bind(actions::MOUSE_LEFT, MouseButton::Left);
        map.bind(actions::MOUSE_RIGHT, MouseButton::Right);
        map.bind(actions::MOUSE_MIDDLE, MouseButton::Middle);

        map.bind_axis(AxisTrigger::PointerX { negative: false }, Axis::PointerX);
        map.bind_axis(AxisTrigger::PointerX { negative: true }, Axis::PointerXNeg);
        map.bind_axis(AxisTrigger::PointerY { negative: false }, Axis::PointerY);
        map.bind_axis(AxisTrigger::PointerY { negative: true }, Axis::PointerYNeg);
        map.bind_axis(AxisTrigger::Wheel { negative: false }, Axis::Wheel);
        map.bind_axis(AxisTrigger::Wheel { negative: true }, Axis::WheelNeg);

        map
    }

    /// Binds `action` to `input`
    ///
    /// Returns false if that exact binding already existed.
    pub fn bind(&mut self, action: &str, input: impl Into<PhysicalInput>) -> bool {
        let bound = self.actions.entry(input.into()).or_default();
        if bound.iter().any(|existing| existing == action) {
            return false;
        }
        bound.push(action.to_owned());
        true
    }

    /// Binds an axis trigger to a channel, replacing any previous channel
    pub fn bind_axis(&mut self, trigger: AxisTrigger, axis: Axis) {
        self.axes.insert(trigger, axis);
    }

    /// Actions driven by `input`
    pub fn actions_for(&self, input: PhysicalInput) -> &[String] {
        self.actions.get(&input).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Channel driven by `trigger`, if bound
    pub fn axis_for(&self, trigger: AxisTrigger) -> Option<Axis> {
        self.axes.get(&trigger).copied()
    }

    /// Number of physical-input bindings
    pub fn binding_count(&self) -> usize {
        self.actions.values().map(Vec::len).sum()
    }
}
