//! Console logging
//!
//! Lines look like `[12:04:31.250] [INFO ] [runner] Window created width=1280`.
//! The subscriber is installed once by the binary; library code only uses
//! `tracing` macros.

use std::fmt;

use chrono::Local;
use colored::Colorize;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::config::LoggingConfig;

/// Single-line console event format
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    timestamps: bool,
}

impl ConsoleFormatter {
    pub fn new(timestamps: bool) -> Self {
        Self { timestamps }
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        if self.timestamps {
            write!(writer, "[{}] ", Local::now().format("%H:%M:%S%.3f"))?;
        }

        let level = format!("{:<5}", metadata.level().to_string());
        if writer.has_ansi_escapes() {
            write!(writer, "[{}] ", colorize(*metadata.level(), &level))?;
        } else {
            write!(writer, "[{level}] ")?;
        }

        write!(writer, "[{}] ", short_target(metadata.target()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn colorize(level: Level, text: &str) -> String {
    match level {
        Level::ERROR => text.red().bold().to_string(),
        Level::WARN => text.yellow().to_string(),
        Level::INFO => text.green().to_string(),
        Level::DEBUG => text.blue().to_string(),
        Level::TRACE => text.dimmed().to_string(),
    }
}

/// Last `::` segment of a module path
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

/// Builds the filter: `RUST_LOG` if set, else the configured level
pub fn env_filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.level)?),
    }
}

/// Installs the global subscriber
///
/// Call once from the entry point, before any other system starts logging.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .event_format(ConsoleFormatter::new(config.timestamps))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
