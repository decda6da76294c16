//! Health checks for validating startup and the host environment
//!
//! Used by `kinetic --check` and by the integration tests. Each check
//! exercises one subsystem without opening a window.
//!
//! # Example
//!
//! ```no_run
//! use kinetic::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(InputCheck::new())
//!     .run();
//!
//! std::process::exit(report.exit_code().into());
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, Findings, SystemCheck};
pub use reporter::{format_details, format_report, print_report};
pub use runner::{CheckEntry, HealthCheckReport, HealthCheckRunner};

/// Runs the full default suite
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::SettingsCheck::new())
        .add_check(checks::InputCheck::new())
        .add_check(checks::WorldCheck::new())
        .add_check(checks::BuildInfoCheck::new())
        .add_check(checks::SystemInfoCheck::new())
        .run()
}
