use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use winit::event_loop::{ControlFlow, EventLoop};

use kinetic::app::App;
use kinetic::build_info;
use kinetic::config::AppConfig;
use kinetic::health;
use kinetic::logging;
use kinetic::settings::{Settings, SettingsError};

#[derive(Parser, Debug)]
#[command(name = "kinetic", version, about = "Kinetic 3D game scaffold")]
struct Cli {
    /// Configuration profile to load from config/{profile}.toml
    ///
    /// Defaults to APP_PROFILE, then "debug".
    #[arg(long)]
    profile: Option<String>,

    /// User settings file layered over the profile
    #[arg(long, default_value = "game.properties")]
    settings: PathBuf,

    /// Run the health checks, print a report and exit
    #[arg(long)]
    check: bool,

    /// Write the resolved configuration for the active profile to the
    /// settings file, then exit
    #[arg(long)]
    write_settings: bool,
}

/// Reads the user's settings file; a missing file yields an empty store so
/// the profile file is not shadowed by defaults
fn load_user_settings(path: &Path) -> Result<Settings, SettingsError> {
    if path.exists() {
        Settings::load(path)
    } else {
        Ok(Settings::new())
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let profile = cli
        .profile
        .clone()
        .or_else(|| std::env::var("APP_PROFILE").ok())
        .unwrap_or_else(|| "debug".to_string());

    let (settings, settings_error) = match load_user_settings(&cli.settings) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::new(), Some(e)),
    };

    let (config, config_error) = match AppConfig::load(&profile, &settings) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init(&config.logging)?;

    info!(version = %build_info::version_string(), "Kinetic");

    if let Some(e) = settings_error {
        warn!(error = %e, "Ignoring unreadable settings file");
    }
    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using default configuration");
    }

    if cli.write_settings {
        config.to_settings().save(&cli.settings)?;
        return Ok(ExitCode::SUCCESS);
    }

    if cli.check {
        let report = health::run_all_checks();
        health::print_report(&report);
        return Ok(ExitCode::from(report.exit_code()));
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(ExitCode::SUCCESS)
}
