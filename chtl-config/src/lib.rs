//! Shared configuration loader for the CHTL toolchain.
//!
//! `defaults/chtl.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ChtlConfig`].

use chtl_core::CompileOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/chtl.default.toml");

/// Name of the per-project file picked up from the working directory.
pub const PROJECT_FILE: &str = "chtl.toml";

/// Top-level configuration consumed by CHTL applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ChtlConfig {
    pub compile: CompileConfig,
    #[serde(default)]
    pub document: DocumentConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    pub runtime_prelude: bool,
}

/// Scaffold settings; both keys are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub format: DiagnosticsFormat,
}

/// How diagnostics are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsFormat {
    Text,
    Json,
    None,
}

impl DiagnosticsFormat {
    pub const ALL: [DiagnosticsFormat; 3] = [Self::Text, Self::Json, Self::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DiagnosticsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ChtlConfig> for CompileOptions {
    fn from(config: &ChtlConfig) -> Self {
        CompileOptions {
            runtime_prelude: config.compile.runtime_prelude,
            title: config.document.title.clone(),
            lang: config.document.lang.clone(),
        }
    }
}

impl From<ChtlConfig> for CompileOptions {
    fn from(config: ChtlConfig) -> Self {
        CompileOptions {
            runtime_prelude: config.compile.runtime_prelude,
            title: config.document.title,
            lang: config.document.lang,
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ChtlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ChtlConfig, ConfigError> {
    Loader::new().build()
}
