//! Host system information health check

use sysinfo::System;

use crate::health::check::{CheckResult, Findings, SystemCheck};

const BYTES_PER_GIB: f64 = 1_073_741_824.0;
/// Below this the game may struggle
const LOW_MEMORY_GIB: f64 = 1.0;

/// Reports OS, CPU and memory of the host
#[derive(Debug, Default)]
pub struct SystemInfoCheck;

impl SystemInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for SystemInfoCheck {
    fn name(&self) -> &'static str {
        "System Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Gathers OS, CPU, and memory information")
    }

    fn check(&self) -> CheckResult {
        let mut sys = System::new_all();
        sys.refresh_all();

        let mut findings = Findings::new();
        let unknown = || "Unknown".to_string();

        findings.ok(format_args!(
            "OS: {} {}",
            System::name().unwrap_or_else(unknown),
            System::os_version().unwrap_or_else(unknown)
        ));
        findings.ok(format_args!(
            "Kernel: {}",
            System::kernel_version().unwrap_or_else(unknown)
        ));

        let physical = System::physical_core_count().unwrap_or(0);
        let logical = sys.cpus().len();
        if logical == 0 {
            findings.warn("Unable to detect CPU cores");
        } else {
            findings.ok(format_args!("CPU cores: {physical} physical, {logical} logical"));
        }

        let total_gib = sys.total_memory() as f64 / BYTES_PER_GIB;
        if total_gib < LOW_MEMORY_GIB {
            findings.warn(format_args!("Memory: {total_gib:.1} GiB total (low)"));
        } else {
            findings.ok(format_args!("Memory: {total_gib:.1} GiB total"));
        }

        findings.finish(
            "System info gathered",
            "System info incomplete",
            "System info unavailable",
        )
    }
}
