//! Configuration system health check

use crate::config::AppConfig;
use crate::health::check::{CheckResult, Findings, SystemCheck};
use crate::settings::Settings;

/// Checks that every profile loads and holds sensible values
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }

    fn validate(config: &AppConfig, findings: &mut Findings) {
        let profile = &config.profile;

        if config.window.width == 0 || config.window.height == 0 {
            findings.warn(format_args!(
                "Profile '{profile}': window size {}x{} has a zero dimension",
                config.window.width, config.window.height
            ));
        }

        let fov = config.graphics.fov_degrees;
        if !(fov > 0.0 && fov < 180.0) {
            findings.warn(format_args!("Profile '{profile}': fov {fov} outside (0, 180)"));
        }

        let audio = &config.audio;
        for (name, volume) in [
            ("master", audio.master_volume),
            ("music", audio.music_volume),
            ("sfx", audio.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&volume) {
                findings.warn(format_args!(
                    "Profile '{profile}': {name} volume {volume} outside [0, 1]"
                ));
            }
        }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates layered configuration loading for each profile")
    }

    fn check(&self) -> CheckResult {
        let mut findings = Findings::new();
        let settings = Settings::new();

        for profile in &self.profiles {
            match AppConfig::load(profile, &settings) {
                Ok(config) => {
                    findings.ok(format_args!(
                        "Profile '{}': {}x{}, log level {}",
                        profile, config.window.width, config.window.height, config.logging.level
                    ));
                    Self::validate(&config, &mut findings);
                }
                Err(e) => findings.fail(format_args!("Profile '{profile}': {e}")),
            }
        }

        match AppConfig::load_from_env(&settings) {
            Ok(config) => findings.ok(format_args!(
                "Environment config: profile '{}' loaded",
                config.profile
            )),
            Err(e) => findings.warn(format_args!("Environment config: {e}")),
        }

        findings.finish(
            &format!("{} profiles validated", self.profiles.len()),
            "Config loaded with warnings",
            "Failed to load one or more config profiles",
        )
    }
}
