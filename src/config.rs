//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::settings::{DEFAULTS, Settings};

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Inner width in logical pixels
    pub width: u32,
    /// Inner height in logical pixels
    pub height: u32,
    /// Borderless fullscreen on the current monitor
    pub fullscreen: bool,
    /// Whether the window should be resizable
    pub resizable: bool,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicsConfig {
    /// Present with vsync
    pub vsync: bool,
    /// Vertical field of view
    pub fov_degrees: f32,
}

/// Volume levels, each in 0.0..=1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    pub master_volume: f32,
    pub music_volume: f32,
    pub sfx_volume: f32,
}

/// Pointer handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Radians of camera orbit per unit of pointer motion
    pub mouse_sensitivity: f32,
    /// Flip vertical orbit direction
    pub invert_y: bool,
}

/// Console logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Prefix each line with wall-clock time
    pub timestamps: bool,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    pub window: WindowConfig,
    pub graphics: GraphicsConfig,
    pub audio: AudioConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources are layered in the following order, later sources winning:
    /// 1. Built-in defaults
    /// 2. config/{profile}.toml (profile-specific configuration)
    /// 3. The user's settings file
    /// 4. Environment variables with prefix APP_ (e.g., APP_WINDOW__WIDTH=1920)
    pub fn load(profile: &str, settings: &Settings) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        for (key, value) in DEFAULTS {
            builder = builder.set_default(*key, *value)?;
        }

        if let Some(dir) = Self::find_config_dir() {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        } else {
            let profile_path = format!("config/{profile}");
            builder = builder.add_source(File::with_name(&profile_path).required(false));
        }

        builder = builder.add_source(settings.clone());

        // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.set_override("profile", profile)?.build()?;

        config.try_deserialize()
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "debug"
    pub fn load_from_env(settings: &Settings) -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "debug".to_string());
        Self::load(&profile, settings)
    }

    /// Flattens the resolved values into settings keys
    ///
    /// Writing these as the user's settings file reproduces this exact
    /// configuration for the same profile.
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::new();

        settings.set("window.title", &self.window.title);
        settings.set("window.width", self.window.width);
        settings.set("window.height", self.window.height);
        settings.set("window.fullscreen", self.window.fullscreen);
        settings.set("window.resizable", self.window.resizable);
        settings.set("graphics.vsync", self.graphics.vsync);
        settings.set("graphics.fov_degrees", self.graphics.fov_degrees);
        settings.set("audio.master_volume", self.audio.master_volume);
        settings.set("audio.music_volume", self.audio.music_volume);
        settings.set("audio.sfx_volume", self.audio.sfx_volume);
        settings.set("input.mouse_sensitivity", self.input.mouse_sensitivity);
        settings.set("input.invert_y", self.input.invert_y);
        settings.set("logging.level", &self.logging.level);
        settings.set("logging.timestamps", self.logging.timestamps);

        settings
    }

    /// Finds the config directory next to the executable, then in the current directory
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }
}

impl Default for AppConfig {
    /// Built-in defaults without consulting any file or the environment
    fn default() -> Self {
        let settings = Settings::with_defaults();

        Self {
            profile: "debug".to_string(),
            window: WindowConfig {
                title: settings.get_string("window.title", "Kinetic"),
                width: settings.get_or("window.width", 1280),
                height: settings.get_or("window.height", 720),
                fullscreen: settings.get_bool("window.fullscreen", false),
                resizable: settings.get_bool("window.resizable", true),
            },
            graphics: GraphicsConfig {
                vsync: settings.get_bool("graphics.vsync", true),
                fov_degrees: settings.get_or("graphics.fov_degrees", 60.0),
            },
            audio: AudioConfig {
                master_volume: settings.get_or("audio.master_volume", 1.0),
                music_volume: settings.get_or("audio.music_volume", 0.8),
                sfx_volume: settings.get_or("audio.sfx_volume", 1.0),
            },
            input: InputConfig {
                mouse_sensitivity: settings.get_or("input.mouse_sensitivity", 0.005),
                invert_y: settings.get_bool("input.invert_y", false),
            },
            logging: LoggingConfig {
                level: settings.get_string("logging.level", "info"),
                timestamps: settings.get_bool("logging.timestamps", true),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_profile_uses_defaults() {
        let config = AppConfig::load("no-such-profile", &Settings::new()).unwrap();

        let expected = AppConfig {
            profile: "no-such-profile".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_profile_file_overrides_defaults() {
        let config = AppConfig::load("debug", &Settings::new()).unwrap();
        assert_eq!(config.profile, "debug");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.window.title, "Kinetic (debug)");
    }

    #[test]
    fn test_settings_override_profile_file() {
        let mut settings = Settings::new();
        settings.set("logging.level", "warn");
        settings.set("window.width", 1920);
        settings.set("graphics.vsync", "off");

        let config = AppConfig::load("debug", &settings).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.window.width, 1920);
        assert!(!config.graphics.vsync);
    }

    #[test]
    fn test_to_settings_covers_every_known_key() {
        let settings = AppConfig::default().to_settings();

        let keys: Vec<_> = settings.iter().map(|(key, _)| key).collect();
        let known: Vec<_> = DEFAULTS.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, known);
    }

    #[test]
    fn test_written_settings_keep_profile_values() {
        let config = AppConfig::load("debug", &Settings::new()).unwrap();

        let reloaded = AppConfig::load("debug", &config.to_settings()).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.window.title, "Kinetic (debug)");
        assert_eq!(reloaded.logging.level, "debug");
    }

    #[test]
    fn test_malformed_setting_is_a_config_error() {
        let mut settings = Settings::new();
        settings.set("window.width", "very wide");

        assert!(AppConfig::load("release", &settings).is_err());
    }
}
