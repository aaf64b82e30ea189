//! Configuration management for moncal.
//!
//! Supports layered configuration: defaults → user config file → env.
//! The widget settings mirror what the embedded widget exposes: week-start
//! convention, locale for the month label, widget width, and weekday header
//! style. Everything is read once at startup; invalid or missing values fall
//! back to the documented defaults.

use crate::domain::WeekStart;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Narrowest width that fits seven 3-column day slots inside a border
pub const MIN_WIDGET_WIDTH: u16 = 24;
/// Widest allowed widget
pub const MAX_WIDGET_WIDTH: u16 = 60;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration with hierarchy: defaults → user → env
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = directories::ProjectDirs::from("com", "moncal", "moncal")
            .map(|dirs| dirs.config_dir().join("config.toml"));
        Self::load_with(user_config.as_deref())
    }

    /// Load configuration with an explicit user config path (also used by tests)
    pub fn load_with(user_config: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with compiled-in defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. User config (~/.config/moncal/config.toml)
        if let Some(path) = user_config {
            if path.exists() {
                builder = builder.add_source(File::from(path.to_path_buf()).required(false));
            }
        }

        // 3. Environment variables (MONCAL_*)
        builder = builder.add_source(
            Environment::with_prefix("MONCAL")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut cfg: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.widget.width = cfg.widget.width.clamp(MIN_WIDGET_WIDTH, MAX_WIDGET_WIDTH);
        Ok(cfg)
    }
}

/// Widget-facing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// First column of the grid
    #[serde(default)]
    pub week_start: WeekStart,
    /// Locale tag for the month label; only the primary subtag is interpreted
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Widget width in terminal columns (clamped to 24..=60)
    #[serde(default = "default_width")]
    pub width: u16,
    /// Weekday header style
    #[serde(default)]
    pub day_labels: LabelStyle,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            locale: default_locale(),
            width: default_width(),
            day_labels: LabelStyle::default(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_width() -> u16 {
    28
}

/// Weekday header label style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Two-letter abbreviations ("Mo")
    #[default]
    Abbrev,
    /// Single letters ("M")
    Narrow,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI refresh rate in milliseconds
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
    /// Enable vim-style navigation (h/j/k/l)
    #[serde(default = "default_vim_navigation")]
    pub vim_navigation: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
            vim_navigation: default_vim_navigation(),
        }
    }
}

fn default_refresh_rate_ms() -> u64 {
    250
}

fn default_vim_navigation() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.widget.week_start, WeekStart::Sunday);
        assert_eq!(config.widget.locale, "en");
        assert_eq!(config.widget.width, 28);
        assert_eq!(config.widget.day_labels, LabelStyle::Abbrev);
        assert_eq!(config.ui.refresh_rate_ms, 250);
        assert!(config.ui.vim_navigation);
    }

    #[test]
    fn test_load_without_user_config_uses_defaults() {
        let config = AppConfig::load_with(None).unwrap();
        assert_eq!(config.widget.week_start, WeekStart::Sunday);
        assert_eq!(config.widget.width, 28);
    }

    #[test]
    fn test_load_from_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[widget]\nweek_start = \"monday\"\nlocale = \"de\"\nwidth = 40\nday_labels = \"narrow\""
        )
        .unwrap();

        let config = AppConfig::load_with(Some(file.path())).unwrap();
        assert_eq!(config.widget.week_start, WeekStart::Monday);
        assert_eq!(config.widget.locale, "de");
        assert_eq!(config.widget.width, 40);
        assert_eq!(config.widget.day_labels, LabelStyle::Narrow);
    }

    #[test]
    fn test_width_is_clamped() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[widget]\nwidth = 500").unwrap();
        let config = AppConfig::load_with(Some(file.path())).unwrap();
        assert_eq!(config.widget.width, MAX_WIDGET_WIDTH);

        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[widget]\nwidth = 3").unwrap();
        let config = AppConfig::load_with(Some(file.path())).unwrap();
        assert_eq!(config.widget.width, MIN_WIDGET_WIDTH);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        // The caller falls back to AppConfig::default() on load errors
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[widget]\nweek_start = \"tuesday\"").unwrap();
        assert!(AppConfig::load_with(Some(file.path())).is_err());
    }
}
