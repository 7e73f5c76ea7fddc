//! Normalize command implementation
//!
//! Reads an export from a file or stdin, parses it and prints the result.

use crate::cli::args::Args;
use crate::cli::commands::shared::print_summary;
use crate::constants::STDIN_SOURCE_NAME;
use crate::{ManrolandParser, ParseResult, ParseStats};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, info};

/// Run the normalize command
pub async fn run_normalize(args: &Args) -> anyhow::Result<ParseStats> {
    let config = args
        .to_parser_config()
        .context("Invalid command line arguments")?;
    let parser = ManrolandParser::from_config(config).context("Failed to load field dictionary")?;
    debug!(
        "Using field dictionary version {}",
        parser.dictionary().version().unwrap_or("unversioned")
    );

    let (source_name, result) = read_input(&parser, args).await?;
    let json = render_json(&result, args.compact)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json).context("Failed to write JSON to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    info!(
        "Wrote {} records for machine '{}'",
        result.values.len(),
        result.meta.machine
    );
    if args.verbose > 0 && !args.quiet {
        print_summary(&source_name, &result.stats);
    }

    Ok(result.stats)
}

/// Parse the file named on the command line, or stdin when there is none
///
/// Returns the name used for reporting along with the result.
pub async fn read_input(
    parser: &ManrolandParser,
    args: &Args,
) -> anyhow::Result<(String, ParseResult)> {
    match &args.file {
        Some(path) => {
            let result = parser
                .parse_file(path)
                .await
                .with_context(|| format!("Failed to normalize {}", path.display()))?;
            Ok((path.display().to_string(), result))
        }
        None => {
            let parser = parser.clone();
            let result = tokio::task::spawn_blocking(move || {
                parser.parse_reader(std::io::stdin().lock(), None)
            })
            .await
            .context("Stdin reader task failed")?
            .context("Failed to normalize export from stdin")?;
            Ok((STDIN_SOURCE_NAME.to_string(), result))
        }
    }
}

/// Serialize a parse result, pretty-printed unless `compact` is set
pub fn render_json(result: &ParseResult, compact: bool) -> anyhow::Result<String> {
    let json = if compact {
        serde_json::to_string(result)
    } else {
        serde_json::to_string_pretty(result)
    };
    json.context("Failed to serialize parse result")
}
