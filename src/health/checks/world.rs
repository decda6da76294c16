//! Game world/simulation health check

use crate::health::check::{CheckResult, Findings, SystemCheck};
use crate::sim::{Avatar, SpinningBox, World};

/// Builds the demo scene and steps it through tick, pause and time scale
#[derive(Debug, Default)]
pub struct WorldCheck;

impl WorldCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for WorldCheck {
    fn name(&self) -> &'static str {
        "World/Simulation"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates the demo scene, ticking, pause and time scale")
    }

    fn check(&self) -> CheckResult {
        let mut findings = Findings::new();
        let mut world = World::demo();

        let scene_ok = findings.expect(
            world.get_typed::<SpinningBox>(World::BOX).is_some()
                && world.get_typed::<Avatar>(World::PLAYER).is_some(),
            format_args!("Demo scene holds {} objects", world.objects().len()),
        );
        if !scene_ok {
            return findings.finish("", "", "Demo scene incomplete");
        }

        findings.expect(
            world.tick_count() == 0 && world.sim_time() == 0.0,
            "Fresh world starts at tick 0",
        );

        let start = world.get(World::BOX).map(|o| o.transform().rotation);
        world.tick(0.016);
        let after = world.get(World::BOX).map(|o| o.transform().rotation);
        findings.expect(world.tick_count() == 1, "Tick advances the counter");
        findings.expect(start != after, "Spinning box rotates on tick");

        world.pause();
        world.tick(0.016);
        findings.expect(world.tick_count() == 1, "Paused world ignores ticks");

        world.resume();
        world.set_time_scale(2.0);
        let before = world.sim_time();
        world.tick(0.5);
        findings.expect(
            (world.sim_time() - before - 1.0).abs() < 1e-6,
            "Time scale multiplies elapsed time",
        );

        findings.finish(
            "All world systems operational",
            "World usable with warnings",
            "World simulation misbehaves",
        )
    }
}
