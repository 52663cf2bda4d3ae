//! Terminal output formatting.

use colored::Colorize;
use lexstat_token::StatsReport;

/// Print the text report on stdout and a short notice for anything dropped.
pub fn print_report(report: &StatsReport) {
    print!("{}", report.to_display_string());
    print_notices(report);
}

/// Print the JSON report on stdout.
pub fn print_json(report: &StatsReport) -> serde_json::Result<()> {
    println!("{}", report.to_json()?);
    print_notices(report);
    Ok(())
}

fn print_notices(report: &StatsReport) {
    let stats = &report.stats;

    if stats.files_skipped > 0 {
        eprintln!(
            "{} {} file(s) could not be opened and were skipped",
            "⚠".yellow().bold(),
            stats.files_skipped.to_string().yellow()
        );
    }

    if stats.tokens_rejected > 0 {
        eprintln!(
            "{} {} token(s) exceeded the length limit and were not counted",
            "⚠".yellow().bold(),
            stats.tokens_rejected.to_string().yellow()
        );
    }

    if stats.files_scanned == 0 && stats.files_skipped == 0 {
        eprintln!("{}", "No regular files found.".dimmed());
    }
}
