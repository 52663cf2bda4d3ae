//! Token and corpus statistics models.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized word token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Occurrence count of one distinct token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStats {
    pub token: Token,
    pub occurrences: u64,
}

impl TokenStats {
    pub fn is_singleton(&self) -> bool {
        self.occurrences == 1
    }
}

/// An entry of the ranked table, copied out of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub token: Token,
    pub occurrences: u64,
}

impl RankedEntry {
    /// Share of `total_tokens`, in percent.
    pub fn frequency(&self, total_tokens: u64) -> f64 {
        if total_tokens == 0 {
            return 0.0;
        }
        self.occurrences as f64 / total_tokens as f64 * 100.0
    }
}

impl From<&TokenStats> for RankedEntry {
    fn from(stats: &TokenStats) -> Self {
        Self {
            token: stats.token.clone(),
            occurrences: stats.occurrences,
        }
    }
}

/// Aggregate counters for a processed corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Every token instance, duplicates included.
    pub total_tokens: u64,
    pub unique_tokens: usize,
    /// Distinct tokens seen exactly once across the whole corpus.
    pub singleton_tokens: usize,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub lines_scanned: u64,
    pub tokens_rejected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_borrows_as_str() {
        let mut map = std::collections::HashMap::new();
        map.insert(Token::new("cat"), 1);
        assert_eq!(map.get("cat"), Some(&1));
    }

    #[test]
    fn test_frequency_percentage() {
        let entry = RankedEntry {
            token: Token::new("the"),
            occurrences: 2,
        };
        assert!((entry.frequency(8) - 25.0).abs() < f64::EPSILON);
        assert_eq!(entry.frequency(0), 0.0);
    }

    #[test]
    fn test_token_serializes_as_plain_string() {
        let json = serde_json::to_string(&Token::new("10.901")).unwrap();
        assert_eq!(json, "\"10.901\"");
    }
}
