//! Shared configuration loader for the apidoc toolchain.
//!
//! `defaults/apidoc.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`ApidocConfig`].

use apidoc_export::CodeStyle;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/apidoc.default.toml");

/// Top-level configuration consumed by apidoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ApidocConfig {
    pub project: ProjectConfig,
    pub export: ExportConfig,
    pub templates: TemplateConfig,
    #[serde(default)]
    pub styles: Vec<StyleConfig>,
}

impl ApidocConfig {
    /// Custom code styles in declaration order, ready for the highlighter.
    pub fn code_styles(&self) -> Vec<CodeStyle> {
        self.styles
            .iter()
            .map(|style| {
                CodeStyle::new(style.class.as_str(), style.start.as_str())
                    .with_patterns(style.patterns.iter().cloned())
            })
            .collect()
    }
}

/// Where documents and templates live.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub root: String,
}

/// Knobs for the export pass itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub title: String,
    pub output: String,
    pub highlight: bool,
}

/// Template file names, resolved against the project root.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    pub html: String,
    pub css: String,
}

/// One custom code style: HTML class, start macro, regex patterns.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    pub class: String,
    pub start: String,
    #[serde(default)]
    pub patterns: Vec<String>,
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ApidocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ApidocConfig, ConfigError> {
    Loader::new().build()
}
