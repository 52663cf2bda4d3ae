//! Corpus scanning.
//!
//! Lists the regular files of a directory, reads them line by line, feeds
//! each line to the tokenizer and aggregates every token into one
//! [`FrequencyTable`]. Files can be scanned sequentially or on tokio's
//! blocking pool; both give the same table.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use lexstat_core::{Config, CorpusStats, LexError, LexResult};

use crate::frequency::FrequencyTable;
use crate::rank::{extract_top, Ranking};
use crate::reporter::StatsReport;
use crate::tokenizer::LineTokenizer;

/// Line and rejection counts for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTally {
    pub lines: u64,
    pub rejected: u64,
}

/// Aggregated result of scanning a directory.
#[derive(Debug, Clone, Default)]
pub struct CorpusScan {
    pub table: FrequencyTable,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub lines_scanned: u64,
    pub tokens_rejected: u64,
}

impl CorpusScan {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            table: FrequencyTable::with_capacity(capacity),
            ..Default::default()
        }
    }

    fn record(&mut self, tally: Option<FileTally>) {
        match tally {
            Some(tally) => {
                self.files_scanned += 1;
                self.lines_scanned += tally.lines;
                self.tokens_rejected += tally.rejected;
            }
            None => self.files_skipped += 1,
        }
    }

    /// Rank the top `n` tokens and compute the corpus counters.
    pub fn rank(&self, n: usize) -> (Ranking, CorpusStats) {
        let ranking = extract_top(&self.table, n);
        let stats = CorpusStats {
            total_tokens: self.table.total_count(),
            unique_tokens: self.table.unique_count(),
            singleton_tokens: ranking.singletons,
            files_scanned: self.files_scanned,
            files_skipped: self.files_skipped,
            lines_scanned: self.lines_scanned,
            tokens_rejected: self.tokens_rejected,
        };
        (ranking, stats)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CorpusScanner {
    tokenizer: LineTokenizer,
    max_line_bytes: usize,
    table_size: usize,
}

impl CorpusScanner {
    pub fn from_config(config: &Config) -> Self {
        Self {
            tokenizer: LineTokenizer::new(config.max_token_bytes),
            max_line_bytes: config.max_line_bytes,
            table_size: config.table_size,
        }
    }

    /// Regular files directly inside `dir`, sorted by name.
    ///
    /// Subdirectories and symlinks are not listed.
    pub fn list_files(dir: &Path) -> LexResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|source| LexError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            match entry.file_type() {
                Ok(kind) if kind.is_file() => files.push(entry.path()),
                Ok(_) => debug!(path = %entry.path().display(), "Not a regular file, skipped"),
                Err(e) => warn!(path = %entry.path().display(), error = %e, "Cannot stat entry"),
            }
        }

        files.sort();
        Ok(files)
    }

    /// Tokenize every line from `reader` into `table`.
    pub fn scan_reader<R: BufRead>(
        &self,
        mut reader: R,
        table: &mut FrequencyTable,
    ) -> std::io::Result<FileTally> {
        let mut tally = FileTally::default();
        let mut raw = Vec::new();

        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            if raw.last() == Some(&b'\n') {
                raw.pop();
                if raw.last() == Some(&b'\r') {
                    raw.pop();
                }
            }

            let line = String::from_utf8_lossy(&raw);
            tally.lines += 1;
            if line.len() > self.max_line_bytes {
                warn!(
                    len = line.len(),
                    limit = self.max_line_bytes,
                    "Unusually long line"
                );
            }

            let scanned = self.tokenizer.tokenize(&line);
            for err in &scanned.rejected {
                warn!(error = %err, "Token rejected");
            }
            tally.rejected += scanned.rejected.len() as u64;
            for token in scanned.tokens {
                table.increment(token);
            }
        }

        Ok(tally)
    }

    /// Scan one file into `table`. Returns `None` when the file cannot be
    /// opened; a read error part way through keeps what was already counted.
    pub fn scan_file(&self, path: &Path, table: &mut FrequencyTable) -> Option<FileTally> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cannot open file, skipped");
                return None;
            }
        };

        let mut partial = FrequencyTable::new();
        let tally = match self.scan_reader(BufReader::new(file), &mut partial) {
            Ok(tally) => tally,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Read failed, file truncated");
                FileTally::default()
            }
        };
        debug!(
            path = %path.display(),
            lines = tally.lines,
            tokens = partial.total_count(),
            "File scanned"
        );
        table.merge(partial);
        Some(tally)
    }

    /// Scan every regular file of `dir`, one after the other.
    pub fn scan_directory(&self, dir: &Path) -> LexResult<CorpusScan> {
        let files = Self::list_files(dir)?;
        info!(dir = %dir.display(), files = files.len(), "Scanning directory");

        let mut scan = CorpusScan::with_capacity(self.table_size);
        for path in &files {
            let tally = self.scan_file(path, &mut scan.table);
            scan.record(tally);
        }
        Ok(scan)
    }

    /// Scan files on the blocking pool with at most `jobs` in flight.
    ///
    /// Per-file tables are merged in listing order, so the result matches
    /// [`scan_directory`](Self::scan_directory).
    pub async fn scan_directory_parallel(&self, dir: &Path, jobs: usize) -> LexResult<CorpusScan> {
        let files = Self::list_files(dir)?;
        info!(dir = %dir.display(), files = files.len(), jobs, "Scanning directory in parallel");

        let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
        let mut handles = Vec::with_capacity(files.len());
        for path in files {
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| LexError::worker(e.to_string()))?;
            let scanner = *self;
            handles.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                let mut table = FrequencyTable::new();
                let tally = scanner.scan_file(&path, &mut table);
                (table, tally)
            }));
        }

        let mut scan = CorpusScan::with_capacity(self.table_size);
        for handle in handles {
            let (table, tally) = handle.await.map_err(|e| LexError::worker(e.to_string()))?;
            scan.table.merge(table);
            scan.record(tally);
        }
        Ok(scan)
    }
}

/// Scan `dir`, rank the result and build the report with timings.
pub async fn analyze_directory(dir: &Path, config: &Config) -> LexResult<StatsReport> {
    let started = Instant::now();
    let scanner = CorpusScanner::from_config(config);

    let scan = if config.jobs > 1 {
        scanner.scan_directory_parallel(dir, config.jobs).await?
    } else {
        scanner.scan_directory(dir)?
    };
    let tokenize_ms = started.elapsed().as_millis();

    let (ranking, stats) = scan.rank(config.top);
    drop(scan);
    let total_ms = started.elapsed().as_millis();

    info!(
        total = stats.total_tokens,
        unique = stats.unique_tokens,
        singletons = stats.singleton_tokens,
        skipped = stats.files_skipped,
        "Corpus analyzed"
    );
    if ranking.is_empty() {
        info!("No tokens found");
    }

    Ok(StatsReport::new(&ranking, config.top, stats, tokenize_ms, total_ms))
}
