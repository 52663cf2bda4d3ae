//! Token frequency table.
//!
//! A hash index over insertion-ordered storage: lookups are O(1) and
//! iteration follows the order in which tokens were first seen.

use std::collections::HashMap;

use lexstat_core::{Token, TokenStats};

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<Token, usize>,
    entries: Vec<TokenStats>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size storage for roughly `capacity` distinct tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            total: 0,
        }
    }

    /// Count one more sighting of `token`.
    pub fn increment(&mut self, token: Token) {
        self.add(token, 1);
    }

    fn add(&mut self, token: Token, occurrences: u64) {
        self.total += occurrences;
        match self.index.get(token.as_str()) {
            Some(&slot) => self.entries[slot].occurrences += occurrences,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push(TokenStats { token, occurrences });
            }
        }
    }

    /// Fold `other` into this table. Tokens new to this table are appended
    /// in `other`'s first-seen order.
    pub fn merge(&mut self, other: FrequencyTable) {
        for stats in other.entries {
            self.add(stats.token, stats.occurrences);
        }
    }

    pub fn get(&self, token: &str) -> Option<&TokenStats> {
        self.index.get(token).map(|&slot| &self.entries[slot])
    }

    /// Every token instance counted so far.
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens.
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenStats> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::LineTokenizer;

    fn table_from(lines: &[&str]) -> FrequencyTable {
        let tokenizer = LineTokenizer::default();
        let mut table = FrequencyTable::new();
        for line in lines {
            for token in tokenizer.tokenize(line).tokens {
                table.increment(token);
            }
        }
        table
    }

    #[test]
    fn test_counts_for_sentence() {
        let table = table_from(&["The cat sat on the mat."]);
        assert_eq!(table.total_count(), 6);
        assert_eq!(table.unique_count(), 5);
        assert_eq!(table.get("the").map(|s| s.occurrences), Some(2));
        assert_eq!(table.get("cat").map(|s| s.occurrences), Some(1));
        assert!(table.get("dog").is_none());
    }

    #[test]
    fn test_total_is_sum_of_occurrences() {
        let table = table_from(&[
            "a b c a b a",
            "10.5 apples, 10.5 pears (and) 'a' plum",
        ]);
        let sum: u64 = table.iter().map(|s| s.occurrences).sum();
        assert_eq!(table.total_count(), sum);
        assert_eq!(table.unique_count(), table.iter().count());
    }

    #[test]
    fn test_iteration_follows_first_sighting() {
        let table = table_from(&["b a b c a"]);
        let order: Vec<&str> = table.iter().map(|s| s.token.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_two_tables_from_same_input_match() {
        let lines = ["Same input, same <i>stats</i>.", "'twice' and twice"];
        let first = table_from(&lines);
        let second = table_from(&lines);
        let a: Vec<_> = first.iter().cloned().collect();
        let b: Vec<_> = second.iter().cloned().collect();
        assert_eq!(a, b);
        assert_eq!(first.total_count(), second.total_count());
    }

    #[test]
    fn test_merge_preserves_order_and_totals() {
        let mut left = table_from(&["x y x"]);
        let right = table_from(&["z y w"]);
        left.merge(right);

        let order: Vec<&str> = left.iter().map(|s| s.token.as_str()).collect();
        assert_eq!(order, vec!["x", "y", "z", "w"]);
        assert_eq!(left.total_count(), 6);
        assert_eq!(left.get("y").map(|s| s.occurrences), Some(2));
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::with_capacity(1000);
        assert!(table.is_empty());
        assert_eq!(table.total_count(), 0);
        assert_eq!(table.unique_count(), 0);
    }
}
