//! Shared configuration loader for formatpilot.
//!
//! `defaults/formatpilot.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`FormatPilotConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pilot_babel::{BoldStyle, ConvertOptions, LinkedInOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/formatpilot.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "formatpilot.toml";

/// Top-level configuration consumed by formatpilot applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatPilotConfig {
    pub linkedin: LinkedInConfig,
}

/// Mirrors the knobs exposed by the LinkedIn serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedInConfig {
    pub char_limit: usize,
    pub bold_style: BoldStyle,
    pub bullet: String,
    pub flatten_tables: bool,
    pub emoji_shortcodes: bool,
    pub word_counts: bool,
}

impl From<&LinkedInConfig> for LinkedInOptions {
    fn from(config: &LinkedInConfig) -> Self {
        LinkedInOptions {
            char_limit: config.char_limit,
            bold_style: config.bold_style,
            bullet: config.bullet.clone(),
            flatten_tables: config.flatten_tables,
            emoji_shortcodes: config.emoji_shortcodes,
            word_counts: config.word_counts,
        }
    }
}

impl From<&FormatPilotConfig> for ConvertOptions {
    fn from(config: &FormatPilotConfig) -> Self {
        ConvertOptions {
            linkedin: (&config.linkedin).into(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<FormatPilotConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FormatPilotConfig, ConfigError> {
    Loader::new().build()
}
