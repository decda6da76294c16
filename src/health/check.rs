//! Core health check trait and result types

use std::fmt;
use std::time::Duration;

use colored::{ColoredString, Colorize};

/// Outcome of a single check, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStatus {
    Pass,
    /// Usable, but something looks off
    Warn,
    Fail,
}

impl CheckStatus {
    /// Pass or Warn
    pub fn is_ok(self) -> bool {
        self != CheckStatus::Fail
    }

    pub fn is_fail(self) -> bool {
        self == CheckStatus::Fail
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        }
    }

    pub fn colored(self) -> ColoredString {
        match self {
            CheckStatus::Pass => self.label().green(),
            CheckStatus::Warn => self.label().yellow(),
            CheckStatus::Fail => self.label().red(),
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a system check
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// One-line summary shown in the report table
    pub message: String,
    /// Extra lines printed below the table
    pub details: Vec<String>,
    /// Filled in by the runner
    pub duration: Duration,
}

impl CheckResult {
    pub fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Fail, message)
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Detail lines gathered while a check runs, tracking the worst status seen
#[derive(Debug, Default)]
pub struct Findings {
    worst: Option<CheckStatus>,
    lines: Vec<String>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(&mut self, line: impl fmt::Display) {
        self.record(CheckStatus::Pass, "✓", line);
    }

    pub fn warn(&mut self, line: impl fmt::Display) {
        self.record(CheckStatus::Warn, "⚠", line);
    }

    pub fn fail(&mut self, line: impl fmt::Display) {
        self.record(CheckStatus::Fail, "✗", line);
    }

    /// Records `line` as ok or failed depending on `passed`
    pub fn expect(&mut self, passed: bool, line: impl fmt::Display) -> bool {
        if passed {
            self.ok(line);
        } else {
            self.fail(line);
        }
        passed
    }

    pub fn status(&self) -> CheckStatus {
        self.worst.unwrap_or(CheckStatus::Pass)
    }

    /// Builds the result, choosing the message matching the worst status
    pub fn finish(self, pass: &str, warn: &str, fail: &str) -> CheckResult {
        let status = self.status();
        let message = match status {
            CheckStatus::Pass => pass,
            CheckStatus::Warn => warn,
            CheckStatus::Fail => fail,
        };
        CheckResult::new(status, message).with_details(self.lines)
    }

    fn record(&mut self, status: CheckStatus, mark: &str, line: impl fmt::Display) {
        self.worst = self.worst.max(Some(status));
        self.lines.push(format!("  {mark} {line}"));
    }
}

/// A health check for one subsystem
pub trait SystemCheck {
    fn name(&self) -> &'static str;

    fn check(&self) -> CheckResult;

    fn description(&self) -> Option<&'static str> {
        None
    }
}
