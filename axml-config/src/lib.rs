//! Shared configuration loader for axml2xaml.
//!
//! `defaults/axml.default.toml` is embedded into the binary so that documented
//! defaults and runtime behavior stay in sync. Applications layer user files
//! and CLI overrides on top of those defaults via [`Loader`] before
//! deserializing into [`AxmlConfig`].

use axml_babel::ConvertOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/axml.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "axml.toml";

/// Top-level configuration consumed by axml2xaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AxmlConfig {
    pub convert: ConvertConfig,
    pub design: DesignConfig,
}

/// Conversion knobs, mirrored by the `convert` command flags.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub namespace: String,
    pub overwrite: bool,
    pub data_context: bool,
    pub image_extension: String,
    pub indent_size: usize,
}

/// Design-time data context placeholders.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignConfig {
    pub view_model_namespace: String,
    pub view_model: String,
}

impl From<&AxmlConfig> for ConvertOptions {
    fn from(config: &AxmlConfig) -> Self {
        ConvertOptions {
            namespace: config.convert.namespace.clone(),
            overwrite: config.convert.overwrite,
            data_context: config.convert.data_context,
            image_extension: config.convert.image_extension.clone(),
            view_model_namespace: config.design.view_model_namespace.clone(),
            view_model: config.design.view_model.clone(),
            indent_size: config.convert.indent_size,
        }
    }
}

impl From<AxmlConfig> for ConvertOptions {
    fn from(config: AxmlConfig) -> Self {
        ConvertOptions::from(&config)
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

    /// Apply a single key/value override, e.g. `convert.namespace` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AxmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AxmlConfig, ConfigError> {
    Loader::new().build()
}
