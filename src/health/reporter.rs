//! Table rendering for health check reports

use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Modify, Style};

use super::runner::HealthCheckReport;

/// Renders the report as a table followed by a summary
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Check", "Status", "Time", "Result"]);

    for entry in &report.entries {
        builder.push_record([
            entry.name.clone(),
            entry.result.status.colored().to_string(),
            format!("{:.2?}", entry.result.duration),
            entry.result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Columns::one(1)).with(Alignment::center()));

    format!("{table}\n{}", format_summary(report))
}

fn format_summary(report: &HealthCheckReport) -> String {
    let mut lines = vec![
        String::new(),
        "Summary".bold().underline().to_string(),
        format!("  Total checks: {}", report.total()),
        format!("  {} Passed: {}", "✓".green(), report.passed()),
    ];

    if report.has_warnings() {
        lines.push(format!("  {} Warned: {}", "⚠".yellow(), report.warned()));
    }
    if !report.is_healthy() {
        lines.push(format!("  {} Failed: {}", "✗".red(), report.failed()));
    }

    let overall = match (report.is_healthy(), report.has_warnings()) {
        (false, _) => "Overall: UNHEALTHY".red().bold(),
        (true, true) => "Overall: HEALTHY (with warnings)".yellow().bold(),
        (true, false) => "Overall: HEALTHY".green().bold(),
    };
    lines.push(String::new());
    lines.push(format!("  {overall}"));

    lines.join("\n") + "\n"
}

/// Renders the detail lines of every check that produced some
pub fn format_details(report: &HealthCheckReport) -> String {
    report
        .entries
        .iter()
        .filter(|entry| !entry.result.details.is_empty())
        .map(|entry| {
            format!(
                "\n{}\n{}\n",
                entry.name.bold(),
                entry.result.details.join("\n")
            )
        })
        .collect()
}

/// Prints the table, summary and details to stdout
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));
    print!("{}", format_details(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::check::{CheckResult, CheckStatus, SystemCheck};
    use crate::health::runner::HealthCheckRunner;

    struct Detailed;

    impl SystemCheck for Detailed {
        fn name(&self) -> &'static str {
            "Detailed"
        }

        fn check(&self) -> CheckResult {
            CheckResult::warn("looked odd").with_details(vec!["  ⚠ something".to_string()])
        }
    }

    #[test]
    fn test_report_lists_checks_and_summary() {
        colored::control::set_override(false);
        let report = HealthCheckRunner::new().add_check(Detailed).run();

        let text = format_report(&report);
        assert!(text.contains("Detailed"));
        assert!(text.contains(CheckStatus::Warn.label()));
        assert!(text.contains("looked odd"));
        assert!(text.contains("Overall: HEALTHY (with warnings)"));

        let details = format_details(&report);
        assert!(details.contains("something"));
    }
}
