//! TOML configuration for substitution tables and generation limits
//!
//! ```toml
//! [generator]
//! max_input_chars = 12
//! max_variants = 50000
//!
//! [[substitutions]]
//! from = "a"
//! to = "@"
//! ```
//!
//! A `substitutions` list replaces the built-in table entirely.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::munge::{GeneratorConfig, SubstitutionPair, SubstitutionTable, TableError};

/// Errors that can occur when loading or parsing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid substitution table: {0}")]
    TableError(#[from] TableError),
}

/// Loaded configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Generation limits
    pub generator: GeneratorConfig,
    /// Substitution table in use
    pub table: SubstitutionTable,
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    generator: Option<TomlGenerator>,
    substitutions: Option<Vec<SubstitutionPair>>,
}

/// Limits section; `0` means no limit
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlGenerator {
    max_input_chars: Option<usize>,
    max_variants: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        let mut generator = GeneratorConfig::default();
        if let Some(limits) = parsed.generator {
            if let Some(max) = limits.max_input_chars {
                generator.max_input_chars = (max > 0).then_some(max);
            }
            if let Some(max) = limits.max_variants {
                generator.max_variants = (max > 0).then_some(max);
            }
        }

        let table = match parsed.substitutions {
            Some(pairs) => SubstitutionTable::from_pairs(pairs)?,
            None => SubstitutionTable::builtin().clone(),
        };

        Ok(Config { generator, table })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            table: SubstitutionTable::builtin().clone(),
        }
    }
}
