//! Shared configuration loader for the scansion toolchain.
//!
//! `defaults/scansion.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`ScansionConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use scansion_parser::constraint::{parse_ranking, ConstraintKind, RankingError};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/scansion.default.toml");

/// Top-level configuration consumed by scansion applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ScansionConfig {
    pub derivation: DerivationConfig,
}

/// Knobs of the serial derivation driver.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DerivationConfig {
    pub max_steps: usize,
    pub ranking: Vec<String>,
}

impl DerivationConfig {
    /// Resolve the configured identifiers into a validated ranking.
    pub fn ranking_kinds(&self) -> Result<Vec<ConstraintKind>, RankingError> {
        parse_ranking(&self.ranking)
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ScansionConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ScansionConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scansion_parser::constraint::DEFAULT_RANKING;
    use std::io::Write;

    #[test]
    fn test_loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.derivation.max_steps, 64);
        assert_eq!(
            config.derivation.ranking_kinds().expect("defaults to resolve"),
            DEFAULT_RANKING.to_vec()
        );
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scansion.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "[derivation]").unwrap();
        writeln!(file, "max-steps = 8").unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.derivation.max_steps, 8);
        // Keys the user file does not mention keep their defaults.
        assert_eq!(config.derivation.ranking.len(), 4);
    }

    #[test]
    fn test_missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does-not-exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.derivation.max_steps, 64);
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        assert!(Loader::new().with_file("does-not-exist.toml").build().is_err());
    }

    #[test]
    fn test_invalid_ranking_is_reported() {
        let config = DerivationConfig {
            max_steps: 64,
            ranking: vec!["trochee".to_string(), "trochee".to_string()],
        };
        assert_eq!(
            config.ranking_kinds(),
            Err(RankingError::Duplicate(ConstraintKind::Trochee))
        );
    }
}
