//! Per-parse state machine
//!
//! A [`ParseSession`] receives tokenized rows one at a time and decides what
//! each row is. Before the header row every line is metadata; from the
//! header row on every line is a measurement. The session owns all mutable
//! parse state, so concurrent parses never share anything but the
//! dictionary.

use tracing::{debug, trace, warn};

use super::column_mapping::HeaderSet;
use super::header::{MetadataBlock, get_machine_name};
use super::record_parser::{
    correct_old_tonval, is_old_tonval_schema, normalize_data_row, normalize_meta,
};
use super::row_classifier::{is_header_row, is_secondary_color_row, should_skip};
use super::secondary_color::{enhance_secondary_color_row, normalize_secondary_color_row};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{Cell, MeasurementRow, MetaRecord};
use crate::app::services::field_dictionary::FieldDictionary;
use crate::constants::{MAKER, STDIN_SOURCE_NAME};
use crate::{Error, Result};

/// Section of the export the session is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Metadata block, before the column header row
    PreHeader,
    /// Measurement rows, for the remainder of the stream
    InData,
}

/// Transient state of a single parse
#[derive(Debug)]
pub struct ParseSession<'a> {
    dictionary: &'a FieldDictionary,
    filename: Option<String>,
    state: ParseState,
    headers: HeaderSet,
    metadata: MetadataBlock,
    values: Vec<MeasurementRow>,
    stats: ParseStats,
}

impl<'a> ParseSession<'a> {
    /// Start a session; `filename` is only used for the machine identifier
    pub fn new(dictionary: &'a FieldDictionary, filename: Option<&str>) -> Self {
        Self {
            dictionary,
            filename: filename.map(str::to_string),
            state: ParseState::PreHeader,
            headers: HeaderSet::new(),
            metadata: MetadataBlock::new(),
            values: Vec::new(),
            stats: ParseStats::new(),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn metadata(&self) -> &MetadataBlock {
        &self.metadata
    }

    pub fn values(&self) -> &[MeasurementRow] {
        &self.values
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Feed the next row of the stream
    pub fn push_row(&mut self, row: &[Cell]) {
        self.stats.rows_read += 1;

        if should_skip(row) {
            self.stats.rows_skipped += 1;
            trace!("Skipped row {}", self.stats.rows_read);
            return;
        }

        match self.state {
            ParseState::InData => self.push_data_row(row),
            ParseState::PreHeader if is_header_row(row) => {
                self.headers.extend_from_row(row);
                self.stats.header_rows += 1;
                self.state = ParseState::InData;
                debug!(
                    "Header row found at row {} ({} columns, {} metadata lines)",
                    self.stats.rows_read,
                    self.headers.len(),
                    self.metadata.len()
                );
            }
            ParseState::PreHeader => {
                if self.metadata.record_line(row) {
                    self.stats.metadata_lines += 1;
                }
            }
        }
    }

    fn push_data_row(&mut self, row: &[Cell]) {
        if is_header_row(row) {
            warn!(
                "Row {} repeats the header marker inside the data section; treating it as data",
                self.stats.rows_read
            );
        }

        let mapped = self.headers.map_row(row);
        let normalized = normalize_data_row(&mapped, self.dictionary.data());
        let old_schema = is_old_tonval_schema(&normalized);
        let primary = correct_old_tonval(normalized);

        if is_secondary_color_row(row) {
            self.stats.secondary_rows += 1;
            let candidates = normalize_secondary_color_row(&mapped, self.dictionary.secondary());
            self.stats.secondary_suppressed += self.dictionary.secondary().len() - candidates.len();

            for candidate in candidates {
                let record = enhance_secondary_color_row(candidate, &primary);
                self.values.push(MeasurementRow::Secondary(record));
                self.stats.secondary_records += 1;
            }
        } else {
            if old_schema {
                self.stats.legacy_rows_reconciled += 1;
            }
            self.values.push(MeasurementRow::Primary(primary));
            self.stats.primary_rows += 1;
        }
    }

    /// Close the session and build the result
    ///
    /// # Errors
    /// * Returns `Error::InvalidInput` if no measurement rows were produced
    /// * Returns `Error::PaperType` if the paper type carries no paper grade
    pub fn finish(self) -> Result<ParseResult> {
        let source_name = self.filename.as_deref().unwrap_or(STDIN_SOURCE_NAME);

        if self.values.is_empty() {
            let message = match self.state {
                ParseState::PreHeader => "no column header row found",
                ParseState::InData => "no measurement rows after the column header row",
            };
            return Err(Error::invalid_input(source_name, message));
        }

        let fields = normalize_meta(&self.metadata.to_record(), self.dictionary.meta())?;
        let meta = MetaRecord {
            maker: MAKER.to_string(),
            machine: get_machine_name(self.filename.as_deref()),
            fields,
        };

        debug!(
            "Finished '{}': {} primary rows, {} secondary records ({} suppressed)",
            source_name,
            self.stats.primary_rows,
            self.stats.secondary_records,
            self.stats.secondary_suppressed
        );

        Ok(ParseResult {
            meta,
            values: self.values,
            stats: self.stats,
        })
    }
}
