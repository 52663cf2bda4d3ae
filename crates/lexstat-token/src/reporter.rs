//! Corpus statistics reports.
//!
//! Renders the ranked token table and the summary counters, either as the
//! fixed-width text table or as JSON.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use lexstat_core::{CorpusStats, RankedEntry};

use crate::rank::Ranking;

/// Full report of one corpus run.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub top: usize,
    pub ranking: Vec<RankedRow>,
    pub stats: CorpusStats,
    pub tokenize_ms: u128,
    pub total_ms: u128,
}

/// One printed row of the ranked table.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRow {
    pub rank: usize,
    pub token: String,
    pub occurrences: u64,
    pub frequency: f64,
}

impl RankedRow {
    fn new(rank: usize, entry: &RankedEntry, total_tokens: u64) -> Self {
        Self {
            rank,
            token: entry.token.to_string(),
            occurrences: entry.occurrences,
            frequency: entry.frequency(total_tokens),
        }
    }
}

impl StatsReport {
    /// Build a report; only the first `top` ranked entries are kept.
    pub fn new(
        ranking: &Ranking,
        top: usize,
        stats: CorpusStats,
        tokenize_ms: u128,
        total_ms: u128,
    ) -> Self {
        let ranking = ranking
            .entries
            .iter()
            .take(top)
            .enumerate()
            .map(|(i, entry)| RankedRow::new(i + 1, entry, stats.total_tokens))
            .collect();

        Self {
            top,
            ranking,
            stats,
            tokenize_ms,
            total_ms,
        }
    }

    /// Format the report as the bordered text table.
    pub fn to_display_string(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} most frequent words:\n", self.top));
        output.push_str(&separator());
        output.push_str(&format!(
            "| {:>7} | {:>20} | {:>10} | {:>7}|\n",
            "Sl. No.", "Token", "Occurances", "Frequency"
        ));
        output.push_str(&separator());

        for row in &self.ranking {
            output.push_str(&format!(
                "| {:>7} | {} | {:>10} | {:>7.4}% | \n",
                row.rank,
                pad_left(&row.token, 20),
                row.occurrences,
                row.frequency
            ));
        }

        output.push_str(&separator());
        output.push_str(&format!(
            "\n\nTotal Unique Tokens: {}\n",
            self.stats.unique_tokens
        ));
        output.push_str(&format!("\nTotal Tokens: {}\n", self.stats.total_tokens));
        output.push_str(&format!(
            "\nTokens Occuring Only Once: {}\n",
            self.stats.singleton_tokens
        ));
        output.push_str(&format!(
            "\nTime Taken for Tokenization: {} ms\n",
            self.tokenize_ms
        ));
        output.push_str(&format!("\nTotal Time Taken: {} ms\n", self.total_ms));

        output
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn separator() -> String {
    format!(
        "|-{}-+-{}-+-{}-+-{}|\n",
        "-".repeat(7),
        "-".repeat(20),
        "-".repeat(10),
        "-".repeat(9)
    )
}

/// Right-align a string to a visual width.
fn pad_left(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visual), s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexstat_core::Token;

    fn sample_ranking() -> Ranking {
        Ranking {
            entries: vec![
                RankedEntry {
                    token: Token::new("the"),
                    occurrences: 2,
                },
                RankedEntry {
                    token: Token::new("cat"),
                    occurrences: 1,
                },
            ],
            singletons: 4,
        }
    }

    fn sample_stats() -> CorpusStats {
        CorpusStats {
            total_tokens: 6,
            unique_tokens: 5,
            singleton_tokens: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_table_layout() {
        let report = StatsReport::new(&sample_ranking(), 30, sample_stats(), 3, 5);
        let text = report.to_display_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "30 most frequent words:");
        assert_eq!(lines[1], "|---------+----------------------+------------+----------|");
        assert_eq!(lines[2], "| Sl. No. |                Token | Occurances | Frequency|");
        assert_eq!(lines[3], lines[1]);
        assert_eq!(lines[4], "|       1 |                  the |          2 | 33.3333% | ");
        assert_eq!(lines[5], "|       2 |                  cat |          1 | 16.6667% | ");
        assert_eq!(lines[6], lines[1]);
    }

    #[test]
    fn test_summary_lines() {
        let report = StatsReport::new(&sample_ranking(), 30, sample_stats(), 3, 5);
        let text = report.to_display_string();
        assert!(text.contains("\n\n\nTotal Unique Tokens: 5\n"));
        assert!(text.contains("\nTotal Tokens: 6\n"));
        assert!(text.contains("\nTokens Occuring Only Once: 4\n"));
        assert!(text.contains("\nTime Taken for Tokenization: 3 ms\n"));
        assert!(text.ends_with("\nTotal Time Taken: 5 ms\n"));
    }

    #[test]
    fn test_rows_capped_at_top() {
        let report = StatsReport::new(&sample_ranking(), 1, sample_stats(), 0, 0);
        assert_eq!(report.ranking.len(), 1);
        assert!(report.to_display_string().starts_with("1 most frequent words:"));
    }

    #[test]
    fn test_empty_ranking_renders_zero_rows() {
        let report = StatsReport::new(&Ranking::default(), 30, CorpusStats::default(), 0, 0);
        let text = report.to_display_string();
        let rows = text.lines().filter(|l| l.starts_with("|  ")).count();
        assert_eq!(rows, 0);
        assert!(text.contains("Total Tokens: 0"));
    }

    #[test]
    fn test_long_token_is_not_cut() {
        let ranking = Ranking {
            entries: vec![RankedEntry {
                token: Token::new("a".repeat(25)),
                occurrences: 1,
            }],
            singletons: 1,
        };
        let stats = CorpusStats {
            total_tokens: 1,
            unique_tokens: 1,
            singleton_tokens: 1,
            ..Default::default()
        };
        let text = StatsReport::new(&ranking, 30, stats, 0, 0).to_display_string();
        assert!(text.contains(&"a".repeat(25)));
    }

    #[test]
    fn test_json_output() {
        let report = StatsReport::new(&sample_ranking(), 30, sample_stats(), 3, 5);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["stats"]["total_tokens"], 6);
        assert_eq!(value["ranking"][0]["token"], "the");
        assert_eq!(value["ranking"][0]["rank"], 1);
    }
}
