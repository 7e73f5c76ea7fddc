//! Core manroland export parser implementation
//!
//! This module provides the parser entry points: it wires the decoder and
//! the CSV tokenizer to a [`ParseSession`] and returns exactly one outcome
//! per input, a [`ParseResult`] or an error.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::decoding::DecodingReader;
use super::session::ParseSession;
use super::stats::ParseResult;
use crate::app::models::RawRow;
use crate::app::services::field_dictionary::FieldDictionary;
use crate::config::ParserConfig;
use crate::constants::STDIN_SOURCE_NAME;
use crate::{Error, Result};

/// Parser for manroland measurement exports
///
/// The parser holds only read-only state: the shared field dictionary and
/// its configuration. It is cheap to clone and can run any number of parses
/// concurrently.
#[derive(Debug, Clone)]
pub struct ManrolandParser {
    dictionary: Arc<FieldDictionary>,
    config: ParserConfig,
}

impl ManrolandParser {
    /// Create a parser with the default configuration
    pub fn new(dictionary: Arc<FieldDictionary>) -> Self {
        Self {
            dictionary,
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with an explicit configuration
    pub fn with_config(dictionary: Arc<FieldDictionary>, config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { dictionary, config })
    }

    /// Create a parser, resolving the dictionary from the configuration
    pub fn from_config(config: ParserConfig) -> Result<Self> {
        let dictionary = FieldDictionary::resolve(&config)?;
        Self::with_config(Arc::new(dictionary), config)
    }

    pub fn dictionary(&self) -> &Arc<FieldDictionary> {
        &self.dictionary
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse rows that were already tokenized
    pub fn parse_rows<I>(&self, rows: I, filename: Option<&str>) -> Result<ParseResult>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut session = ParseSession::new(&self.dictionary, filename);
        for row in rows {
            session.push_row(&row);
        }
        session.finish()
    }

    /// Decode, tokenize and parse an export from any byte source
    ///
    /// `filename` is only used to derive the machine identifier and to label
    /// errors.
    ///
    /// # Errors
    /// * Returns `Error::CsvParsing` if reading or tokenizing fails midway;
    ///   no partial result is produced
    /// * Returns `Error::InvalidInput` if the stream holds no measurement rows
    /// * Returns `Error::PaperType` if the paper type carries no paper grade
    pub fn parse_reader<R: Read>(&self, reader: R, filename: Option<&str>) -> Result<ParseResult> {
        let source_name = filename.unwrap_or(STDIN_SOURCE_NAME);
        info!("Parsing manroland export: {}", source_name);

        let decoded = DecodingReader::new(reader, self.config.encoding()?);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.config.delimiter)
            .from_reader(decoded);

        let mut session = ParseSession::new(&self.dictionary, filename);
        for (index, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| {
                Error::csv_parsing(
                    source_name,
                    format!("Failed to read CSV row {}", index + 1),
                    Some(e),
                )
            })?;

            let row: RawRow = record
                .iter()
                .map(|field| (!field.is_empty()).then(|| field.to_string()))
                .collect();
            session.push_row(&row);
        }

        let result = session.finish()?;
        info!(
            "Parsed {} measurement rows from {} input rows",
            result.values.len(),
            result.stats.rows_read
        );
        Ok(result)
    }

    /// Parse an in-memory export
    pub fn parse_bytes(&self, bytes: &[u8], filename: Option<&str>) -> Result<ParseResult> {
        self.parse_reader(bytes, filename)
    }

    /// Parse an export file on the blocking thread pool
    ///
    /// The file name (without directories) is used as the filename hint.
    pub async fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let parser = self.clone();
        let path = path.to_path_buf();
        debug!("Scheduling parse of {}", path.display());

        tokio::task::spawn_blocking(move || {
            let file = File::open(&path)
                .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            parser.parse_reader(BufReader::new(file), filename.as_deref())
        })
        .await
        .map_err(|e| Error::io("Parse task failed", std::io::Error::other(e)))?
    }
}
