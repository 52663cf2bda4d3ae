//! Centralized error types for lexstat.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for lexstat operations.
#[derive(Error, Debug)]
pub enum LexError {
    #[error("Cannot read directory '{path}': {source}", path = .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Worker failed: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for lexstat operations.
pub type LexResult<T> = Result<T, LexError>;

impl LexError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a worker error.
    pub fn worker(msg: impl Into<String>) -> Self {
        Self::Worker(msg.into())
    }
}

/// A token the line scanner refused to emit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Token exceeds {limit} bytes (starts with '{prefix}')")]
    TokenOverflow { prefix: String, limit: usize },
}

impl TokenizeError {
    /// Build an overflow error from the rejected buffer, keeping a short prefix.
    pub fn overflow(buffer: &str, limit: usize) -> Self {
        let prefix: String = buffer.chars().take(32).collect();
        Self::TokenOverflow { prefix, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_keeps_short_prefix() {
        let long = "x".repeat(5000);
        let err = TokenizeError::overflow(&long, 2048);
        match &err {
            TokenizeError::TokenOverflow { prefix, limit } => {
                assert_eq!(prefix.len(), 32);
                assert_eq!(*limit, 2048);
            }
        }
        assert!(err.to_string().contains("2048 bytes"));
    }

    #[test]
    fn test_directory_error_names_path() {
        let err = LexError::DirectoryUnreadable {
            path: PathBuf::from("/no/such/dir"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/no/such/dir"));
    }
}
