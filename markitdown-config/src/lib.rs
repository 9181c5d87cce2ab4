//! Shared configuration loader for the markitdown toolchain.
//!
//! `defaults/markitdown.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MarkitdownConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use markitdown_core::PreviewOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/markitdown.default.toml");

/// Top-level configuration consumed by markitdown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkitdownConfig {
    pub log: LogConfig,
    pub convert: ConvertConfig,
    pub preview: PreviewConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// An `EnvFilter` directive, e.g. `warn` or `markitdown_core=debug`.
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Default output format name.
    pub to: String,
}

/// Mirrors the knobs exposed by the preview renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PreviewConfig {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub raw_html: bool,
}

impl From<PreviewConfig> for PreviewOptions {
    fn from(config: PreviewConfig) -> Self {
        PreviewOptions::from(&config)
    }
}

impl From<&PreviewConfig> for PreviewOptions {
    fn from(config: &PreviewConfig) -> Self {
        PreviewOptions {
            table: config.table,
            strikethrough: config.strikethrough,
            autolink: config.autolink,
            tasklist: config.tasklist,
            raw_html: config.raw_html,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub filename: String,
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
    pub fn build(self) -> Result<MarkitdownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkitdownConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.convert.to, "markdown");
        assert_eq!(config.export.filename, markitdown_core::export::DEFAULT_FILENAME);
        assert!(!config.preview.raw_html);
    }

    #[test]
    fn default_preview_matches_renderer_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(PreviewOptions::from(config.preview), PreviewOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("preview.raw_html", true)
            .expect("override to apply")
            .set_override("export.filename", "notes.md")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.preview.raw_html);
        assert_eq!(config.export.filename, "notes.md");
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markitdown.toml");
        fs::write(&path, "[preview]\ntable = false\n\n[convert]\nto = \"html\"\n").unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert!(!config.preview.table);
        assert!(config.preview.strikethrough);
        assert_eq!(config.convert.to, "html");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let dir = tempdir().unwrap();
        let config = Loader::new()
            .with_optional_file(dir.path().join("absent.toml"))
            .build()
            .expect("config to build");
        assert_eq!(config.convert.to, "markdown");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn wrong_type_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[preview]\ntable = \"sometimes\"\n").unwrap();
        assert!(Loader::new().with_file(&path).build().is_err());
    }
}
