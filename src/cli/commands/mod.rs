//! Command implementations for the manroland CSV normalizer CLI
//!
//! The binary has a single command: normalize one export and print it as
//! JSON. Logging and reporting helpers live in `shared`.

pub mod normalize;
pub mod shared;

pub use normalize::{read_input, render_json};

use crate::ParseStats;
use crate::cli::args::Args;

/// Main command runner
///
/// Sets up logging, then normalizes the requested export and writes it to
/// stdout.
pub async fn run(args: Args) -> anyhow::Result<ParseStats> {
    shared::setup_logging(&args);
    normalize::run_normalize(&args).await
}
