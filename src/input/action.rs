//! Action names and continuous axis channels

use std::fmt;

/// Names of the actions bound by [`InputMap::with_defaults`](super::InputMap::with_defaults)
pub mod actions {
    pub const MOVE_FORWARD: &str = "MOVE_FORWARD";
    pub const MOVE_BACKWARD: &str = "MOVE_BACKWARD";
    pub const MOVE_LEFT: &str = "MOVE_LEFT";
    pub const MOVE_RIGHT: &str = "MOVE_RIGHT";
    pub const JUMP: &str = "JUMP";
    pub const EXIT: &str = "EXIT";
    pub const MOUSE_LEFT: &str = "MOUSE_LEFT";
    pub const MOUSE_RIGHT: &str = "MOUSE_RIGHT";
    pub const MOUSE_MIDDLE: &str = "MOUSE_MIDDLE";
}

/// Continuous input channel
///
/// Signed motion is reported on two channels per direction, each carrying a
/// magnitude. The `*Neg` channels subtract from the shared accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    PointerX,
    PointerXNeg,
    PointerY,
    PointerYNeg,
    Wheel,
    WheelNeg,
}

impl Axis {
    /// Every channel, in declaration order
    pub const ALL: [Axis; 6] = [
        Axis::PointerX,
        Axis::PointerXNeg,
        Axis::PointerY,
        Axis::PointerYNeg,
        Axis::Wheel,
        Axis::WheelNeg,
    ];

    /// Identifier used on the event stream
    pub fn name(self) -> &'static str {
        match self {
            Axis::PointerX => "pointerX",
            Axis::PointerXNeg => "pointerXNeg",
            Axis::PointerY => "pointerY",
            Axis::PointerYNeg => "pointerYNeg",
            Axis::Wheel => "wheel",
            Axis::WheelNeg => "wheelNeg",
        }
    }

    /// Looks up a channel by identifier; anything outside the fixed set is `None`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.name() == name)
    }

    /// Sign applied to a sample before it is accumulated
    pub fn sign(self) -> f32 {
        match self {
            Axis::PointerX | Axis::PointerY | Axis::Wheel => 1.0,
            Axis::PointerXNeg | Axis::PointerYNeg | Axis::WheelNeg => -1.0,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_names_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_name(axis.name()), Some(axis));
        }
    }

    #[test]
    fn test_axis_names_are_case_sensitive() {
        assert_eq!(Axis::from_name("pointerx"), None);
        assert_eq!(Axis::from_name("WHEEL"), None);
        assert_eq!(Axis::from_name(""), None);
    }

    #[test]
    fn test_negative_channels_subtract() {
        assert_eq!(Axis::PointerX.sign(), 1.0);
        assert_eq!(Axis::PointerXNeg.sign(), -1.0);
        assert_eq!(Axis::WheelNeg.sign(), -1.0);
    }
}
