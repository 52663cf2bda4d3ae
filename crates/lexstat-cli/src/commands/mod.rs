//! CLI argument definitions and the run handler.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use lexstat_core::{Config, OutputFormat};

use crate::output;

/// Lexstat - word frequency statistics for a directory of text files
#[derive(Parser, Debug)]
#[command(name = "lexstat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to parse (regular files directly inside it)
    pub directory: PathBuf,

    /// Frequency table size hint; non-numeric values fall back to 1000
    pub table_size: Option<String>,

    /// Number of ranked tokens to print
    #[arg(long, env = "LEXSTAT_TOP")]
    pub top: Option<usize>,

    /// Files tokenized in parallel
    #[arg(short, long, env = "LEXSTAT_JOBS")]
    pub jobs: Option<usize>,

    /// Report format (text or json)
    #[arg(long, env = "LEXSTAT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Merge the config file (if any) with command line and env overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => Config::default(),
        };

        if self.table_size.is_some() {
            config.table_size = Config::parse_table_size(self.table_size.as_deref());
        }
        if let Some(top) = self.top {
            config.top = top;
        }
        if let Some(jobs) = self.jobs {
            config.jobs = jobs;
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        config.validate()?;
        Ok(config)
    }

    pub async fn execute(self) -> Result<()> {
        let config = self.resolve_config()?;
        tracing::debug!(?config, dir = %self.directory.display(), "Starting run");

        let report = lexstat_token::analyze_directory(&self.directory, &config)
            .await
            .with_context(|| format!("Failed to analyze: {}", self.directory.display()))?;

        match config.format {
            OutputFormat::Text => output::print_report(&report),
            OutputFormat::Json => output::print_json(&report)?,
        }

        Ok(())
    }
}
