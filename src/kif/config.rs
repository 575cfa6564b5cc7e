//! Configuration loading
//!
//! `defaults/kif.default.toml` is embedded into the library so the documented defaults and
//! runtime behavior stay in sync. Callers layer user files and single-key overrides on top
//! through [`Loader`] before deserializing into [`KifConfig`].

use crate::kif::conversion::DEFAULT_KB_NAME;
use crate::kif::translation::TranslationOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/kif.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct KifConfig {
    pub translation: TranslationOptions,
    pub conversion: ConversionConfig,
}

/// Batch conversion settings that are not translation options
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    #[serde(default = "default_kb_name")]
    pub kb_name: String,
}

fn default_kb_name() -> String {
    DEFAULT_KB_NAME.to_string()
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

    /// Layer TOML text, e.g. a config read by the caller
    pub fn with_toml(mut self, text: &str) -> Self {
        self.builder = self.builder.add_source(File::from_str(text, FileFormat::Toml));
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

    pub fn build(self) -> Result<KifConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<KifConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kif::translation::Dialect;

    #[test]
    fn defaults_match_translation_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.translation, TranslationOptions::default());
        assert_eq!(config.conversion.kb_name, "KB");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("translation.output_dialect", "thf")
            .expect("override to apply")
            .set_override("translation.hide_numbers", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.translation.output_dialect, Dialect::Thf);
        assert!(!config.translation.hide_numbers);
        assert!(config.translation.add_prefixes);
    }

    #[test]
    fn layers_partial_toml() {
        let config = Loader::new()
            .with_toml("[conversion]\nkb_name = \"SUMO\"\n[translation]\nremove_strings = true\n")
            .build()
            .expect("config to build");
        assert_eq!(config.conversion.kb_name, "SUMO");
        assert!(config.translation.remove_strings);
        assert!(config.translation.remove_hol);
    }

    #[test]
    fn rejects_unknown_dialect() {
        let result = Loader::new()
            .set_override("translation.output_dialect", "cnf")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/kif.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.conversion.kb_name, "KB");
    }
}
