//! Shared configuration loader for the formdown tools.
//!
//! `defaults/formdown.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`FormdownConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use formdown::renderers::ScriptOptions;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/formdown.default.toml");

/// Top-level configuration consumed by formdown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FormdownConfig {
    pub render: RenderConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

/// Output selection and Apps Script knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub target: String,
    pub function_name: String,
    pub indent: String,
}

impl RenderConfig {
    /// Renderer parameters for `target`, as accepted by
    /// [`formdown::RendererRegistry::render_with_options`].
    ///
    /// Only the apps-script renderer takes parameters; every other target
    /// gets an empty map.
    pub fn params_for(&self, target: &str) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if target == "apps-script" {
            params.insert("function-name".to_string(), self.function_name.clone());
            params.insert("indent".to_string(), self.indent.clone());
        }
        params
    }
}

impl From<&RenderConfig> for ScriptOptions {
    fn from(config: &RenderConfig) -> Self {
        ScriptOptions {
            function_name: config.function_name.clone(),
            indent: config.indent.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    pub strict_navigation: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
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
    pub fn build(self) -> Result<FormdownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FormdownConfig, ConfigError> {
    Loader::new().build()
}
