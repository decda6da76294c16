//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, Findings, SystemCheck};

/// Reports the metadata embedded at compile time
#[derive(Debug, Default)]
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (version, rustc, target)")
    }

    fn check(&self) -> CheckResult {
        let mut findings = Findings::new();

        for line in build_info::detailed_info().lines() {
            findings.ok(line);
        }

        if build_info::PKG_VERSION.is_empty() || build_info::CARGO_TARGET_TRIPLE.is_empty() {
            findings.warn("Version or target triple missing");
        }

        findings.finish(
            &format!("Kinetic {}", build_info::version_string()),
            "Build metadata incomplete",
            "Build metadata unavailable",
        )
    }
}
