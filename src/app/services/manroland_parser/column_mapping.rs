//! Column header capture and positional-to-named row mapping
//!
//! The header row of an export names every positional column of the data
//! section. It is captured once per parse and then used to turn each data
//! row into a named-field record.

use crate::app::models::{Cell, FieldValue, Record};

/// Ordered column names captured from the header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    columns: Vec<Cell>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header fragment; earlier columns are never overwritten
    pub fn extend_from_row(&mut self, row: &[Cell]) {
        self.columns.extend(row.iter().cloned());
    }

    pub fn columns(&self) -> &[Cell] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of the first column with the given name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.as_deref() == Some(name))
    }

    /// Map a positional row onto the captured headers
    pub fn map_row(&self, row: &[Cell]) -> Record {
        map_to_headers(row, &self.columns)
    }
}

/// Zip a positional row against header names
///
/// Cells beyond the last header are dropped, headers beyond the last cell get
/// no entry, and null header cells bind nothing. When a header name repeats,
/// the later column wins.
pub fn map_to_headers(row: &[Cell], headers: &[Cell]) -> Record {
    headers
        .iter()
        .zip(row.iter())
        .filter_map(|(header, cell)| {
            header
                .as_ref()
                .map(|name| (name.clone(), Some(FieldValue::from_cell(cell))))
        })
        .collect()
}
