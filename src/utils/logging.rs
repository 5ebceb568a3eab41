// file: src/utils/logging.rs
// description: tracing subscriber setup and colored summary report lines for the cli
// reference: https://docs.rs/tracing-subscriber

use crate::models::SummaryStats;
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber on stderr so `summarize --json` keeps
/// stdout clean. `RUST_LOG` overrides the verbosity flag.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Heading printed above the summary text.
pub fn format_summary_heading(max_length: usize) -> String {
    format!(
        "{} {}",
        "✓".green().bold(),
        format!("Summary (budget {} words)", max_length).green()
    )
}

/// One-line word count report, e.g. `ℹ 16 words -> 3 words (81.2% reduction)`.
pub fn format_stats(stats: &SummaryStats) -> String {
    format!(
        "{} {} words -> {} words ({}% reduction)",
        "ℹ".blue().bold(),
        stats.original_length,
        stats.summary_length.to_string().bold(),
        stats.compression_ratio
    )
}

pub fn format_passthrough_notice() -> String {
    format!(
        "{} Text has too few sentences to shorten; returned as-is",
        "ℹ".blue().bold()
    )
}

pub fn format_truncation_notice(max_length: usize) -> String {
    format!(
        "{} {}",
        "⚠".yellow().bold(),
        format!("Summary cut to {} words", max_length).yellow()
    )
}
