//! Top-N ranking.

use serde::Serialize;

use lexstat_core::RankedEntry;

use crate::frequency::FrequencyTable;

/// The most frequent tokens, most frequent first, and the singleton count
/// of the whole table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    pub entries: Vec<RankedEntry>,
    pub singletons: usize,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rank the `n` most frequent tokens of `table`.
///
/// Entries are visited once in table order and insertion-sorted into a
/// buffer capped at `n`. A new entry goes before the first entry with a
/// strictly smaller count, so equal counts keep visiting order.
pub fn extract_top(table: &FrequencyTable, n: usize) -> Ranking {
    if n == 0 && !table.is_empty() {
        tracing::warn!("Ranking capacity is zero, no entries will be ranked");
    }

    let mut entries: Vec<RankedEntry> = Vec::with_capacity(n.min(table.unique_count()));
    let mut singletons = 0;

    for stats in table.iter() {
        if stats.is_singleton() {
            singletons += 1;
        }

        let position = entries
            .iter()
            .position(|e| e.occurrences < stats.occurrences)
            .unwrap_or(entries.len());
        if position >= n {
            continue;
        }
        if entries.len() == n {
            entries.pop();
        }
        entries.insert(position, RankedEntry::from(stats));
    }

    tracing::debug!(
        ranked = entries.len(),
        singletons,
        unique = table.unique_count(),
        "Ranking complete"
    );

    Ranking {
        entries,
        singletons,
    }
}
