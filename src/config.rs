use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recipes::{DEFAULT_MIN_MATCH, DEFAULT_MIN_SCORE, DEFAULT_TOP_N};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    /// Either ingredient name contains the other.
    #[default]
    Substring,

    /// Skim-style fuzzy scoring.
    Fuzzy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of recommendations shown per query.
    pub top_n: usize,

    /// Threshold used when the user does not enter one.
    pub min_match: f64,

    pub matcher: MatcherKind,

    /// Minimum score accepted by the fuzzy matcher.
    pub fuzzy_min_score: i64,

    /// Include the recipes compiled into the binary.
    pub builtin: bool,

    /// JSON catalog files.
    pub catalogs: Vec<PathBuf>,

    /// URLs serving JSON catalogs.
    pub remote_catalogs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_match: DEFAULT_MIN_MATCH,
            matcher: MatcherKind::default(),
            fuzzy_min_score: DEFAULT_MIN_SCORE,
            builtin: true,
            catalogs: Vec::new(),
            remote_catalogs: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a config file. Catalog sources are checked by [`Config::validate`]
    /// once command line sources have been merged in.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.check_threshold()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_threshold()?;

        if !self.builtin && self.catalogs.is_empty() && self.remote_catalogs.is_empty() {
            return Err(ConfigError::Invalid("no recipe catalog configured".into()));
        }

        Ok(())
    }

    fn check_threshold(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.min_match) {
            return Err(ConfigError::Invalid(format!(
                "min_match must be within 0 and 100, got {}",
                self.min_match,
            )));
        }

        Ok(())
    }
}
