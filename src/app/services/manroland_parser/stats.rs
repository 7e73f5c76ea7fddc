//! Parsing statistics and result structures for manroland exports
//!
//! This module provides the final parse result handed to callers and the
//! row counters collected while driving a parse.

use serde::{Deserialize, Serialize};

use crate::app::models::{MeasurementRow, MetaRecord};

/// Parsing result: normalized metadata plus measurement rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Normalized metadata block
    pub meta: MetaRecord,

    /// Primary and secondary measurement rows, in input order
    pub values: Vec<MeasurementRow>,

    /// Row counters; not part of the serialized result
    #[serde(skip)]
    pub stats: ParseStats,
}

impl ParseResult {
    /// Primary color rows only
    pub fn primary_rows(&self) -> impl Iterator<Item = &crate::app::models::Record> {
        self.values.iter().filter_map(MeasurementRow::as_primary)
    }

    /// Secondary color records only
    pub fn secondary_rows(
        &self,
    ) -> impl Iterator<Item = &crate::app::models::SecondaryColorRecord> {
        self.values.iter().filter_map(MeasurementRow::as_secondary)
    }
}

/// Row counters for a single parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Rows delivered by the tokenizer
    pub rows_read: usize,

    /// Raster percentage and grey balance rows
    pub rows_skipped: usize,

    /// Lines recorded into the metadata block
    pub metadata_lines: usize,

    /// Header rows seen (normally exactly one)
    pub header_rows: usize,

    /// Primary color rows emitted
    pub primary_rows: usize,

    /// Secondary color rows read
    pub secondary_rows: usize,

    /// Derived color records emitted from secondary rows
    pub secondary_records: usize,

    /// Derived colors dropped for missing or zero readings
    pub secondary_suppressed: usize,

    /// Primary rows rewritten from the old tone value schema
    pub legacy_rows_reconciled: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total measurement rows in the output
    pub fn values_emitted(&self) -> usize {
        self.primary_rows + self.secondary_records
    }
}
