//! Shared components for CLI commands
//!
//! Logging setup and the stderr summary printed after a parse.

use crate::ParseStats;
use crate::cli::args::Args;
use colored::*;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags. Stdout is reserved
/// for the JSON result.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("manroland_csv={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Print a short parse summary on stderr
pub fn print_summary(source_name: &str, stats: &ParseStats) {
    eprintln!("\n{}", "Parse Summary".bright_green().bold());
    eprintln!("  Source:             {}", source_name);
    eprintln!(
        "  Rows read:          {}",
        stats.rows_read.to_string().bright_white().bold()
    );
    eprintln!("  Rows skipped:       {}", stats.rows_skipped);
    eprintln!("  Metadata lines:     {}", stats.metadata_lines);
    eprintln!(
        "  Primary records:    {}",
        stats.primary_rows.to_string().bright_white().bold()
    );
    eprintln!(
        "  Secondary records:  {} (from {} rows, {} incomplete colors dropped)",
        stats.secondary_records.to_string().bright_white().bold(),
        stats.secondary_rows,
        stats.secondary_suppressed
    );
    if stats.legacy_rows_reconciled > 0 {
        eprintln!(
            "  {} {} rows used the old tone value schema",
            "Note:".yellow().bold(),
            stats.legacy_rows_reconciled
        );
    }
}
