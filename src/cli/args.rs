//! Command-line argument definitions for the manroland CSV normalizer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ParserConfig;
use crate::constants::DEFAULT_SOURCE_ENCODING;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the manroland CSV normalizer
///
/// Reads one press console export and prints the normalized result as JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "manroland-csv",
    version,
    about = "Normalize manroland press measurement CSV exports into JSON",
    long_about = "Reads a CSV measurement export written by a manroland press console, \
                  decodes it, maps its columns onto logical field names through the field \
                  dictionary, reconciles old firmware tone values and expands secondary color \
                  rows. The normalized result is printed to stdout as JSON."
)]
pub struct Args {
    /// Export file to normalize
    ///
    /// When omitted the export is read from stdin and no machine identifier
    /// can be derived.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Path to a field dictionary JSON file
    ///
    /// Overrides the dictionary in the user configuration directory and the
    /// copy embedded in the binary.
    #[arg(
        short = 'd',
        long = "dictionary",
        value_name = "PATH",
        help = "Path to a field dictionary JSON file"
    )]
    pub dictionary: Option<PathBuf>,

    /// Text encoding of the export
    #[arg(
        short = 'e',
        long = "encoding",
        value_name = "LABEL",
        default_value = DEFAULT_SOURCE_ENCODING,
        help = "Text encoding of the export (e.g. windows-1252, utf-8)"
    )]
    pub encoding: String,

    /// CSV field delimiter
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = ',',
        help = "CSV field delimiter"
    )]
    pub delimiter: char,

    /// Print JSON on a single line instead of pretty-printing it
    #[arg(long = "compact", help = "Print compact single-line JSON")]
    pub compact: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Only log errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "Delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }

        if let Some(path) = &self.file {
            if path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Parser configuration described by these arguments
    pub fn to_parser_config(&self) -> Result<ParserConfig> {
        self.validate()?;

        let mut config = ParserConfig::default()
            .with_source_encoding(self.encoding.clone())
            .with_delimiter(self.delimiter as u8);
        if let Some(path) = &self.dictionary {
            config = config.with_dictionary_path(path.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
