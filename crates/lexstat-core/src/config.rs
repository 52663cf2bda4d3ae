//! Run configuration.
//!
//! Values come from built-in defaults, optionally overridden by a TOML file,
//! then by environment variables and command line flags (applied by the CLI).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LexError, LexResult};

/// Rows shown in the ranked table.
pub const DEFAULT_TOP_N: usize = 30;
/// Initial capacity of the frequency table.
pub const DEFAULT_TABLE_SIZE: usize = 1000;
pub const MAX_TOKEN_BYTES: usize = 2048;
pub const MAX_LINE_BYTES: usize = 16384;

/// How the final report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(LexError::config(format!(
                "unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub top: usize,
    pub jobs: usize,
    pub format: OutputFormat,
    pub table_size: usize,
    pub max_token_bytes: usize,
    pub max_line_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP_N,
            jobs: 1,
            format: OutputFormat::Text,
            table_size: DEFAULT_TABLE_SIZE,
            max_token_bytes: MAX_TOKEN_BYTES,
            max_line_bytes: MAX_LINE_BYTES,
        }
    }
}

impl Config {
    /// Load a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LexResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config file");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> LexResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the scanner cannot work with.
    pub fn validate(&self) -> LexResult<()> {
        if self.jobs == 0 {
            return Err(LexError::config("jobs must be at least 1"));
        }
        if self.table_size == 0 {
            return Err(LexError::config("table_size must be at least 1"));
        }
        if self.max_token_bytes == 0 {
            return Err(LexError::config("max_token_bytes must be at least 1"));
        }
        if self.max_line_bytes == 0 {
            return Err(LexError::config("max_line_bytes must be at least 1"));
        }
        Ok(())
    }

    /// Interpret the optional table size positional argument.
    ///
    /// Anything that is not a positive integer falls back to
    /// [`DEFAULT_TABLE_SIZE`].
    pub fn parse_table_size(raw: Option<&str>) -> usize {
        let Some(raw) = raw else {
            return DEFAULT_TABLE_SIZE;
        };
        match raw.trim().parse::<usize>() {
            Ok(size) if size > 0 => size,
            _ => {
                tracing::warn!(
                    value = raw,
                    default = DEFAULT_TABLE_SIZE,
                    "Invalid table size hint, using default"
                );
                DEFAULT_TABLE_SIZE
            }
        }
    }
}
