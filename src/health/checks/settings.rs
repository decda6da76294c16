//! Settings store health check

use crate::health::check::{CheckResult, Findings, SystemCheck};
use crate::settings::{DEFAULTS, Settings};

/// Checks that the built-in defaults survive a write/read cycle
#[derive(Debug, Default)]
pub struct SettingsCheck;

impl SettingsCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for SettingsCheck {
    fn name(&self) -> &'static str {
        "Settings"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates properties formatting, parsing and typed reads")
    }

    fn check(&self) -> CheckResult {
        let mut findings = Findings::new();

        let defaults = Settings::with_defaults();
        findings.expect(
            defaults.len() == DEFAULTS.len(),
            format_args!("{} default keys", defaults.len()),
        );

        let text = defaults.to_properties_string();
        let reparsed = Settings::parse(&text);
        findings.expect(reparsed == defaults, "Properties round trip preserves every value");

        let numeric = ["window.width", "window.height"];
        for key in numeric {
            match defaults.get_parsed::<u32>(key) {
                Ok(Some(value)) => findings.ok(format_args!("{key} = {value}")),
                Ok(None) => findings.fail(format_args!("{key} missing")),
                Err(e) => findings.fail(e),
            }
        }

        match defaults.get_parsed::<f32>("graphics.fov_degrees") {
            Ok(Some(_)) => {}
            Ok(None) => findings.fail("graphics.fov_degrees missing"),
            Err(e) => findings.fail(e),
        }

        findings.finish(
            "Defaults round-trip cleanly",
            "Settings usable with warnings",
            "Settings store is inconsistent",
        )
    }
}
