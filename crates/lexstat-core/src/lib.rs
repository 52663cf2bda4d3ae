//! Lexstat Core Library
//!
//! Domain models, configuration and error types shared by the lexstat
//! tokenizer and command line.

pub mod config;
pub mod error;
pub mod model;

pub use config::{Config, OutputFormat};
pub use error::{LexError, LexResult, TokenizeError};
pub use model::{CorpusStats, RankedEntry, Token, TokenStats};
