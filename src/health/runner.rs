//! Runs a suite of health checks and tallies the outcome

use std::time::Instant;

use tracing::debug;

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// One check's name and result
#[derive(Debug, Clone)]
pub struct CheckEntry {
    pub name: String,
    pub description: Option<&'static str>,
    pub result: CheckResult,
}

/// Results from running a health check suite
#[derive(Debug, Default)]
pub struct HealthCheckReport {
    pub entries: Vec<CheckEntry>,
}

impl HealthCheckReport {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.result.status == status)
            .count()
    }

    pub fn passed(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warned(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    pub fn failed(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    /// No check failed
    pub fn is_healthy(&self) -> bool {
        self.failed() == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned() > 0
    }

    /// Process exit code: 0 all pass, 1 any failure, 2 warnings only
    pub fn exit_code(&self) -> u8 {
        if self.failed() > 0 {
            1
        } else if self.warned() > 0 {
            2
        } else {
            0
        }
    }

    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.result)
    }
}

/// Builder collecting checks to run in order
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs every check, timing each one
    pub fn run(self) -> HealthCheckReport {
        let entries = self
            .checks
            .into_iter()
            .map(|check| {
                let start = Instant::now();
                let result = check.check();
                let result = result.with_duration(start.elapsed());

                debug!(
                    check = check.name(),
                    status = %result.status,
                    elapsed = ?result.duration,
                    "Health check finished"
                );

                CheckEntry {
                    name: check.name().to_string(),
                    description: check.description(),
                    result,
                }
            })
            .collect();

        HealthCheckReport { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, CheckStatus);

    impl SystemCheck for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn check(&self) -> CheckResult {
            CheckResult::new(self.1, "fixed")
        }
    }

    #[test]
    fn test_exit_codes() {
        let report = HealthCheckRunner::new()
            .add_check(Fixed("a", CheckStatus::Pass))
            .run();
        assert_eq!(report.exit_code(), 0);

        let report = HealthCheckRunner::new()
            .add_check(Fixed("a", CheckStatus::Pass))
            .add_check(Fixed("b", CheckStatus::Warn))
            .run();
        assert_eq!(report.exit_code(), 2);
        assert!(report.is_healthy());

        let report = HealthCheckRunner::new()
            .add_check(Fixed("a", CheckStatus::Warn))
            .add_check(Fixed("b", CheckStatus::Fail))
            .run();
        assert_eq!(report.exit_code(), 1);
        assert!(!report.is_healthy());
    }

    #[test]
    fn test_report_preserves_order_and_counts() {
        let report = HealthCheckRunner::new()
            .add_check(Fixed("first", CheckStatus::Fail))
            .add_check(Fixed("second", CheckStatus::Pass))
            .add_check(Fixed("third", CheckStatus::Pass))
            .run();

        let names: Vec<_> = report.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.get("first").map(|r| r.status), Some(CheckStatus::Fail));
    }

    #[test]
    fn test_empty_report_is_healthy() {
        let report = HealthCheckRunner::new().run();
        assert!(report.is_healthy());
        assert_eq!(report.exit_code(), 0);
    }
}
