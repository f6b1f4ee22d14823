//! Configuration file support for the font size demo.
//!
//! The whole configuration is a single JSON document. Every field has a
//! default, so a file only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tickbar_ui::{Color, SliderConfig, SliderError};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Log verbosity, overridden by `RUST_LOG`
    pub log_level: LogLevel,

    /// The font size slider
    pub slider: SliderConfig,

    /// Preview font size for each tick, left to right
    pub font_sizes: Vec<f32>,

    /// Width offered to the slider by the host
    pub surface_width: f32,
}

fn default_font_sizes() -> Vec<f32> {
    vec![12.0, 14.0, 16.0, 18.0, 20.0, 24.0]
}

/// Six ticks, magenta bar, cyan labels and thumb turning green when held,
/// no snap animation, starting on the fifth tick.
fn default_slider() -> SliderConfig {
    SliderConfig::new()
        .tick_count(6)
        .and_then(|c| c.thumb_index(4))
        .unwrap_or_default()
        .tick_height(30.0)
        .bar_color(Color::MAGENTA)
        .text_color(Color::CYAN)
        .text_padding(20.0)
        .text_size(20.0)
        .thumb_radius(30.0)
        .thumb_color_normal(Color::CYAN)
        .thumb_color_pressed(Color::GREEN)
        .with_animation(false)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            slider: default_slider(),
            font_sizes: default_font_sizes(),
            surface_width: 500.0,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Check the slider settings and that every tick has a font size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.slider.validate()?;
        if self.font_sizes.len() != self.slider.ticks() {
            return Err(ConfigError::FontSizeCount {
                sizes: self.font_sizes.len(),
                ticks: self.slider.ticks(),
            });
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Slider settings out of range
    #[error("Invalid slider settings: {0}")]
    Slider(#[from] SliderError),

    /// Font size list does not match the tick count
    #[error("{sizes} font sizes given for {ticks} ticks")]
    FontSizeCount { sizes: usize, ticks: usize },
}
