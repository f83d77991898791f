//! Settings loading for vardecl.
//!
//! `defaults/vardecl.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and flag overrides
//! on top via [`Loader`] before deserializing into [`Settings`].

use crate::decl::messages::Language;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/vardecl.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "vardecl.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub diagnostics: DiagnosticsConfig,
    pub output: OutputConfig,
}

/// How diagnostics are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub language: Language,
    pub report_success: bool,
    pub show_positions: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
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
    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Settings, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let settings = load_defaults().expect("defaults to deserialize");
        assert_eq!(settings.diagnostics.language, Language::En);
        assert!(settings.diagnostics.report_success);
        assert!(settings.diagnostics.show_positions);
        assert_eq!(settings.output.format, "diagnostics-simple");
    }

    #[test]
    fn supports_overrides() {
        let settings = Loader::new()
            .set_override("diagnostics.language", "ru")
            .expect("override to apply")
            .set_override("diagnostics.report_success", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(settings.diagnostics.language, Language::Ru);
        assert!(!settings.diagnostics.report_success);
    }

    #[test]
    fn layers_files_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\nformat = \"tokens-json\"").expect("write config");

        let settings = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(settings.output.format, "tokens-json");
        assert_eq!(settings.diagnostics.language, Language::En);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let settings = Loader::new()
            .with_optional_file("definitely/not/here.toml")
            .build()
            .expect("config to build");
        assert_eq!(settings.output.format, "diagnostics-simple");
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new()
            .with_file("definitely/not/here.toml")
            .build()
            .is_err());
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Loader::new()
            .set_override("diagnostics.language", "xx")
            .expect("override to apply")
            .build()
            .is_err());
    }
}
