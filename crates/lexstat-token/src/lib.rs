//! # Lexstat Token
//!
//! Corpus tokenization and word frequency statistics.
//!
//! Scans the regular files of a directory line by line, counts every
//! normalized token and ranks the most frequent ones.

pub mod corpus;
pub mod frequency;
pub mod rank;
pub mod reporter;
pub mod tokenizer;

pub use corpus::{analyze_directory, CorpusScan, CorpusScanner, FileTally};
pub use frequency::FrequencyTable;
pub use rank::{extract_top, Ranking};
pub use reporter::{RankedRow, StatsReport};
pub use tokenizer::{LineTokenizer, TokenizedLine};
