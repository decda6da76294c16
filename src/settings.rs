//! User settings store
//!
//! A flat, ordered map of dotted keys (`window.width`, `graphics.vsync`,
//! `audio.master_volume`) to string values, persisted as a properties file.
//! Values are parsed on read, falling back to the caller's default when a key
//! is missing or malformed.
//!
//! The store is also a [`config::Source`], so a loaded settings file can be
//! layered into [`AppConfig`](crate::config::AppConfig).

use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{ConfigError, Map, Source, Value, ValueKind};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Built-in defaults for every known key
pub const DEFAULTS: &[(&str, &str)] = &[
    ("window.title", "Kinetic"),
    ("window.width", "1280"),
    ("window.height", "720"),
    ("window.fullscreen", "false"),
    ("window.resizable", "true"),
    ("graphics.vsync", "true"),
    ("graphics.fov_degrees", "60"),
    ("audio.master_volume", "1.0"),
    ("audio.music_volume", "0.8"),
    ("audio.sfx_volume", "1.0"),
    ("input.mouse_sensitivity", "0.005"),
    ("input.invert_y", "false"),
    ("logging.level", "info"),
    ("logging.timestamps", "true"),
];

/// Errors raised while reading or writing settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("setting '{key}' = '{value}' is not a valid {expected}")]
    Parse {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Flat key/value settings with typed accessors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: IndexMap<String, String>,
    /// Where the values came from, reported in config errors
    origin: Option<String>,
}

impl Settings {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding every built-in default
    pub fn with_defaults() -> Self {
        let mut settings = Self::new();
        for (key, value) in DEFAULTS {
            settings.set(key, value);
        }
        settings
    }

    /// Parses properties text
    ///
    /// Accepts `key=value` and `key: value`. Lines starting with `#` or `!`
    /// are comments. A line with no separator is a key with an empty value.
    /// Backslash escapes (`\=`, `\:`, `\ `, `\n`, `\t`, `\r`, `\\`) are
    /// resolved; unescaped whitespace around keys and values is dropped.
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::new();

        for line in text.lines() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = split_entry(line);

            let key = unescape(trim_unescaped_end(key));
            if key.is_empty() {
                warn!(line, "Skipping settings line without a key");
                continue;
            }

            let value = unescape(trim_unescaped_end(value.trim_start()));
            settings.set(&key, value);
        }

        settings
    }

    /// Loads a properties file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut settings = Self::parse(&text);
        settings.origin = Some(path.display().to_string());

        info!(path = %path.display(), keys = settings.len(), "Loaded settings");
        Ok(settings)
    }

    /// Loads a properties file over the built-in defaults
    ///
    /// A missing file is not an error; the defaults are returned as-is.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let mut settings = Self::with_defaults();

        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(settings);
        }

        settings.merge(&Self::load(path)?);
        settings.origin = Some(path.display().to_string());
        Ok(settings)
    }

    /// Writes the store as a properties file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let io_error = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut text = format!(
            "# Kinetic settings\n# Saved {}\n",
            chrono::Local::now().to_rfc3339()
        );
        text.push_str(&self.to_properties_string());

        fs::write(path, text).map_err(io_error)?;

        info!(path = %path.display(), keys = self.len(), "Saved settings");
        Ok(())
    }

    /// Renders every entry as `key=value` lines, in insertion order
    ///
    /// Characters [`parse`](Self::parse) would otherwise split on or trim are
    /// escaped, so the output always parses back to the same entries.
    pub fn to_properties_string(&self) -> String {
        self.values
            .iter()
            .map(|(key, value)| format!("{}={}\n", escape(key, true), escape(value, false)))
            .collect()
    }

    /// Copies or replaces every value present in `other`
    pub fn merge(&mut self, other: &Settings) {
        for (key, value) in &other.values {
            self.set(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_owned()
    }

    /// Reads and parses `key`, returning `default` if missing or malformed
    pub fn get_or<T: FromStr>(&self, key: &str, default: T) -> T {
        match self.get_parsed(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!(error = %e, "Using default for malformed setting");
                default
            }
        }
    }

    /// Reads a boolean; accepts true/false, yes/no, on/off and 1/0
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        let Some(raw) = self.get(key) else {
            return default;
        };

        parse_bool(raw).unwrap_or_else(|| {
            warn!(key, value = raw, "Using default for malformed boolean setting");
            default
        })
    }

    /// Strict typed read; `Ok(None)` if the key is missing
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };

        raw.parse().map(Some).map_err(|_| SettingsError::Parse {
            key: key.to_owned(),
            value: raw.to_owned(),
            expected: std::any::type_name::<T>(),
        })
    }

    /// Sets `key`, replacing any previous value but keeping its position
    pub fn set(&mut self, key: &str, value: impl Display) {
        self.values.insert(key.to_owned(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.shift_remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Source for Settings {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        Ok(self
            .values
            .iter()
            .map(|(key, value)| {
                let value = Value::new(self.origin.as_ref(), ValueKind::String(value.clone()));
                (key.clone(), value)
            })
            .collect())
    }
}

/// Splits at the first unescaped `=` or `:`
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;

    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..index], &line[index + 1..]),
            _ => {}
        }
    }

    (line, "")
}

/// Trims trailing whitespace that is not backslash-escaped
fn trim_unescaped_end(text: &str) -> &str {
    let mut end = text.len();

    while let Some(c) = text[..end].chars().next_back() {
        if !c.is_whitespace() {
            break;
        }
        let before = &text[..end - c.len_utf8()];
        let backslashes = before.len() - before.trim_end_matches('\\').len();
        if backslashes % 2 == 1 {
            break;
        }
        end -= c.len_utf8();
    }

    &text[..end]
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let last = text.char_indices().next_back().map(|(index, _)| index);

    for (index, c) in text.char_indices() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '=' | ':' if is_key => {
                out.push('\\');
                out.push(c);
            }
            '#' | '!' if is_key && index == 0 => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_whitespace() && (is_key || index == 0 || Some(index) == last) => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
