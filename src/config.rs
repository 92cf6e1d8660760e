//! Configuration management for Interactive Page
//!
//! Settings are read from a platform-specific config file. A missing file
//! means defaults. Page state (form values, counter) is never written here.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/interactive-page/config.toml` |
//! | macOS | `~/Library/Application Support/interactive-page/config.toml` |
//! | Windows | `%APPDATA%\interactive-page\config.toml` |
//!
//! ## Example
//!
//! ```no_run
//! use interactive_page::Config;
//!
//! let mut config = Config::load().unwrap_or_default();
//! config.effects.confirmation_ms = 3000;
//! config.save().expect("Failed to save config");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const APP_DIR: &str = "interactive-page";

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading or writing config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the path to the config file.
///
/// Creates the config directory if it doesn't exist.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    let app_dir = config_dir.join(APP_DIR);

    if !app_dir.exists() {
        fs::create_dir_all(&app_dir)?;
    }

    Ok(app_dir.join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
    /// Durations of transient effects
    #[serde(default)]
    pub effects: EffectsConfig,
    /// Counter game settings
    #[serde(default)]
    pub counter: CounterConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Refresh rate for UI updates (in Hz)
    pub refresh_rate_hz: u32,
    /// How long status bar messages stay visible
    pub status_duration_secs: u64,
    /// Theme the page opens with
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_hz: 60,
            status_duration_secs: 3,
            theme: Theme::Light,
        }
    }
}

/// Color theme options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

/// Durations of transient visual effects, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Pressed-state pulse on the counter buttons
    pub button_pulse_ms: u64,
    /// Red flash on the counter value after a reset
    pub reset_flash_ms: u64,
    /// Gold flash on a new high score
    pub high_score_flash_ms: u64,
    /// Lift on a freshly activated tab button
    pub tab_lift_ms: u64,
    /// Highlight on the last-key readout
    pub last_key_flash_ms: u64,
    /// "Processing..." state of the submit button
    pub submit_busy_ms: u64,
    /// Visibility of the registration confirmation
    pub confirmation_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            button_pulse_ms: 100,
            reset_flash_ms: 500,
            high_score_flash_ms: 1000,
            tab_lift_ms: 200,
            last_key_flash_ms: 300,
            submit_busy_ms: 1000,
            confirmation_ms: 5000,
        }
    }
}

impl EffectsConfig {
    pub fn button_pulse(&self) -> Duration {
        Duration::from_millis(self.button_pulse_ms)
    }

    pub fn reset_flash(&self) -> Duration {
        Duration::from_millis(self.reset_flash_ms)
    }

    pub fn high_score_flash(&self) -> Duration {
        Duration::from_millis(self.high_score_flash_ms)
    }

    pub fn tab_lift(&self) -> Duration {
        Duration::from_millis(self.tab_lift_ms)
    }

    pub fn last_key_flash(&self) -> Duration {
        Duration::from_millis(self.last_key_flash_ms)
    }

    pub fn submit_busy(&self) -> Duration {
        Duration::from_millis(self.submit_busy_ms)
    }

    pub fn confirmation(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

/// Counter game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Counts above this value are shown as a win
    pub win_threshold: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { win_threshold: 10 }
    }
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
    /// Log file; the terminal belongs to the UI so logs never go to stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or `interactive-page.log` in the temp directory
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(format!("{}.log", APP_DIR)))
    }
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get UI refresh interval as Duration
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.ui.refresh_rate_hz.max(1) as u64)
    }

    /// How long a status bar message stays up
    pub fn status_duration(&self) -> Duration {
        Duration::from_secs(self.ui.status_duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config_path() -> PathBuf {
        env::temp_dir().join(format!("interactive-page-test-{}.toml", std::process::id()))
    }

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.ui.refresh_rate_hz, 60);
        assert_eq!(config.ui.theme, Theme::Light);
        assert_eq!(config.effects.button_pulse_ms, 100);
        assert_eq!(config.effects.confirmation_ms, 5000);
        assert_eq!(config.effects.submit_busy_ms, 1000);
        assert_eq!(config.counter.win_threshold, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn config_refresh_interval() {
        let config = Config::default();
        // 60 Hz = 16666 microseconds per frame
        assert_eq!(config.refresh_interval().as_micros(), 16666);
    }

    #[test]
    fn zero_refresh_rate_does_not_divide_by_zero() {
        let mut config = Config::default();
        config.ui.refresh_rate_hz = 0;
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
    }

    #[test]
    fn effect_durations() {
        let effects = EffectsConfig::default();
        assert_eq!(effects.reset_flash(), Duration::from_millis(500));
        assert_eq!(effects.high_score_flash(), Duration::from_millis(1000));
        assert_eq!(effects.tab_lift(), Duration::from_millis(200));
        assert_eq!(effects.last_key_flash(), Duration::from_millis(300));
        assert_eq!(effects.confirmation(), Duration::from_secs(5));
    }

    #[test]
    fn config_save_and_load_roundtrip() {
        let path = temp_config_path();

        let mut config = Config::default();
        config.effects.confirmation_ms = 2500;
        config.ui.theme = Theme::Dark;

        config.save_to(&path).expect("Failed to save config");
        let loaded = Config::load_from(&path).expect("Failed to load config");

        assert_eq!(loaded.effects.confirmation_ms, 2500);
        assert_eq!(loaded.ui.theme, Theme::Dark);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_load_missing_file_fails() {
        let path = PathBuf::from("/nonexistent/path/config.toml");
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn config_deserializes_partial_toml() {
        let toml_str = r#"
[ui]
refresh_rate_hz = 30
status_duration_secs = 5
theme = "Dark"

[counter]
win_threshold = 20
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");

        assert_eq!(config.ui.refresh_rate_hz, 30);
        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(config.counter.win_threshold, 20);
        // Missing sections fall back to defaults
        assert_eq!(config.effects.confirmation_ms, 5000);
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn config_fills_missing_keys_within_a_section() {
        let toml_str = r#"
[effects]
confirmation_ms = 3000

[logging]
level = "debug"
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");

        assert_eq!(config.effects.confirmation_ms, 3000);
        assert_eq!(config.effects.button_pulse_ms, 100);
        assert_eq!(config.effects.submit_busy_ms, 1000);
        assert_eq!(config.logging.level, "debug");
        // No [ui] section at all
        assert_eq!(config.ui.refresh_rate_hz, 60);
        assert_eq!(config.ui.theme, Theme::Light);
        assert_eq!(config.counter.win_threshold, 10);
    }

    #[test]
    fn config_serializes_to_toml() {
        let toml_str = toml::to_string_pretty(&Config::default()).expect("Failed to serialize");
        assert!(toml_str.contains("[ui]"));
        assert!(toml_str.contains("[effects]"));
        assert!(toml_str.contains("theme = \"Light\""));
        assert!(toml_str.contains("confirmation_ms = 5000"));
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::NoConfigDir.to_string(),
            "Could not determine config directory"
        );
        let io_err = ConfigError::from(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(io_err.to_string().contains("IO error"));
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.name(), "Dark");
    }

    #[test]
    fn default_log_file_in_temp_dir() {
        let logging = LoggingConfig::default();
        assert!(logging.file_path().ends_with("interactive-page.log"));
    }
}
