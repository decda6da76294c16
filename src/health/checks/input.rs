//! Input tracking health check

use glam::Vec2;
use winit::keyboard::KeyCode;

use crate::health::check::{CheckResult, Findings, SystemCheck};
use crate::input::{InputSystem, actions};

/// Drives the default bindings through a scripted sequence of frames
#[derive(Debug, Default)]
pub struct InputCheck;

impl InputCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for InputCheck {
    fn name(&self) -> &'static str {
        "Input"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates bindings, press/release edges and delta accumulation")
    }

    fn check(&self) -> CheckResult {
        let mut findings = Findings::new();
        let mut input = InputSystem::new();

        findings.ok(format_args!(
            "{} default bindings",
            input.collector().bindings().binding_count()
        ));

        // Frame 1: press
        input.handle_physical(KeyCode::Space, true);
        let tracker = input.tracker();
        findings.expect(
            tracker.is_held(actions::JUMP) && tracker.is_pressed_this_frame(actions::JUMP),
            "Press sets held and the press edge",
        );

        // Frame 2: still held, edge cleared
        input.begin_frame();
        let tracker = input.tracker();
        findings.expect(
            tracker.is_held(actions::JUMP) && !tracker.is_pressed_this_frame(actions::JUMP),
            "Press edge lasts one frame",
        );

        // Frame 3: release
        input.begin_frame();
        input.handle_physical(KeyCode::Space, false);
        let tracker = input.tracker();
        findings.expect(
            !tracker.is_held(actions::JUMP) && tracker.is_released_this_frame(actions::JUMP),
            "Release clears held and sets the release edge",
        );

        // Frame 4: opposing motion nets out per axis
        input.begin_frame();
        input.handle_pointer_motion(3.0, 0.0);
        input.handle_pointer_motion(-1.0, -2.0);
        findings.expect(
            input.tracker().pointer_delta() == Vec2::new(2.0, 2.0),
            format_args!("Pointer delta accumulates to {}", input.tracker().pointer_delta()),
        );

        input.begin_frame();
        findings.expect(input.tracker().is_frame_empty(), "begin_frame() clears deltas and edges");

        findings.expect(
            !input.tracker().is_held("NEVER_BOUND"),
            "Unknown actions read as not held",
        );

        findings.finish(
            "Scripted input sequence behaves",
            "Input usable with warnings",
            "Input tracking misbehaves",
        )
    }
}
