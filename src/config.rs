use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::environment::Environment;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid bindings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid binding `{input}`: {reason}")]
    InvalidBinding { input: String, reason: String },
}

/// Contents of a bindings file:
///
/// ```toml
/// [bindings]
/// one = 1
/// two = 2
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bindings: HashMap<String, i32>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_environment(self) -> Environment {
        self.bindings.into_iter().collect()
    }
}

pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = Config::from_toml(&content)?;
    info!("loaded {} bindings from {}", config.bindings.len(), path.display());
    Ok(config)
}

/// Parses a `name=value` pair as given on the command line.
pub fn parse_binding(input: &str) -> Result<(String, i32), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidBinding {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (name, value) = input.split_once('=').ok_or_else(|| invalid("expected NAME=VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("empty name"));
    }
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid(&e.to_string()))?;
    Ok((name.to_string(), value))
}
