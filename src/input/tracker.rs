//! Per-frame action state with edge detection

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use tracing::trace;

use super::action::Axis;

/// Tracks held actions, this-frame press/release edges and continuous deltas
///
/// Hold state persists across frames. Edges and deltas only cover events seen
/// since the last [`begin_frame`](Self::begin_frame).
#[derive(Debug, Default, Clone)]
pub struct InputTracker {
    held: HashMap<String, bool>,
    pressed: HashSet<String>,
    released: HashSet<String>,
    pointer_delta: Vec2,
    wheel_delta: f32,
}

impl InputTracker {
    /// Creates an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears edges and zeroes deltas; call once per frame boundary
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.pointer_delta = Vec2::ZERO;
        self.wheel_delta = 0.0;
    }

    /// Records a press or release of `name`
    ///
    /// Every call records an edge, even if the hold state did not change. A
    /// press and a release in the same frame leave both edges set.
    pub fn on_discrete_event(&mut self, name: &str, is_pressed: bool) {
        self.held.insert(name.to_owned(), is_pressed);

        let edges = if is_pressed {
            &mut self.pressed
        } else {
            &mut self.released
        };

        if !edges.contains(name) {
            edges.insert(name.to_owned());
        }
    }

    /// Accumulates a sample for the named axis; unknown names are dropped
    pub fn on_axis_event(&mut self, axis_name: &str, value: f32) {
        match Axis::from_name(axis_name) {
            Some(axis) => self.on_axis(axis, value),
            None => trace!(axis = axis_name, "Ignoring unknown axis"),
        }
    }

    /// Accumulates a sample for `axis`
    pub fn on_axis(&mut self, axis: Axis, value: f32) {
        let signed = value * axis.sign();
        match axis {
            Axis::PointerX | Axis::PointerXNeg => self.pointer_delta.x += signed,
            Axis::PointerY | Axis::PointerYNeg => self.pointer_delta.y += signed,
            Axis::Wheel | Axis::WheelNeg => self.wheel_delta += signed,
        }
    }

    /// Releases every held action, recording release edges
    ///
    /// Used when the window loses focus and release events would never arrive.
    pub fn on_focus_lost(&mut self) {
        let held: Vec<String> = self.held_actions().map(str::to_owned).collect();
        for name in held {
            self.on_discrete_event(&name, false);
        }
    }

    pub fn is_held(&self, name: &str) -> bool {
        self.held.get(name).copied().unwrap_or(false)
    }

    pub fn is_pressed_this_frame(&self, name: &str) -> bool {
        self.pressed.contains(name)
    }

    pub fn is_released_this_frame(&self, name: &str) -> bool {
        self.released.contains(name)
    }

    /// Pointer motion accumulated since the last frame boundary
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer_delta
    }

    /// Wheel motion accumulated since the last frame boundary
    pub fn wheel_delta(&self) -> f32 {
        self.wheel_delta
    }

    /// Names of all currently held actions, in no particular order
    pub fn held_actions(&self) -> impl Iterator<Item = &str> {
        self.held
            .iter()
            .filter(|(_, held)| **held)
            .map(|(name, _)| name.as_str())
    }

    /// Returns true if nothing was recorded since the last frame boundary
    pub fn is_frame_empty(&self) -> bool {
        self.pressed.is_empty()
            && self.released.is_empty()
            && self.pointer_delta == Vec2::ZERO
            && self.wheel_delta == 0.0
    }
}
