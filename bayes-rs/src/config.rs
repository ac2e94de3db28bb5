use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BayesError, Result};

/// Tool configuration, loaded from an optional `config.toml`.
/// Command-line flags override anything set here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fallback values for flags the user left off the command line.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Tokenizer id used when `--tokenizer` is absent.
    pub tokenizer: Option<String>,
    /// N-gram width used when `--ngram` is absent.
    pub ngram_width: Option<u32>,
    /// Model path used when `--model` is absent.
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BayesError::Config(e.to_string()))?;

        toml::from_str(&content).map_err(|e| BayesError::Config(e.to_string()))
    }
}
