//! Metadata block accumulation and machine identification
//!
//! Every line before the column header row is a `label,value` pair describing
//! the job, the press and the paper. This module collects those pairs and
//! derives the machine identifier from the export's file name.

use crate::app::models::{Cell, FieldValue, Record};
use crate::constants::MACHINE_NAME_PATTERN;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static MACHINE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(MACHINE_NAME_PATTERN).expect("machine name pattern is a valid regex")
});

/// Raw metadata labels and values, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataBlock {
    entries: IndexMap<String, Cell>,
}

impl MetadataBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a metadata line as `row[0] -> row[1]`
    ///
    /// A later line with the same label overwrites the earlier value. Lines
    /// without a label are ignored. Returns whether the line was recorded.
    pub fn record_line(&mut self, row: &[Cell]) -> bool {
        let Some(Some(label)) = row.first() else {
            return false;
        };
        let value = row.get(1).cloned().flatten();
        self.entries.insert(label.clone(), value);
        true
    }

    /// Raw value recorded under a label
    pub fn get(&self, label: &str) -> Option<&Cell> {
        self.entries.get(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels and values as a named-field record
    pub fn to_record(&self) -> Record {
        self.entries
            .iter()
            .map(|(label, value)| (label.clone(), Some(FieldValue::from_cell(value))))
            .collect()
    }
}

/// Machine identifier ("R" and three digits, any case) found in a file name
///
/// The first match is returned verbatim; no file name or no match yields an
/// empty string.
pub fn get_machine_name(filename: Option<&str>) -> String {
    filename
        .and_then(|name| MACHINE_NAME.find(name))
        .map(|found| found.as_str().to_string())
        .unwrap_or_default()
}
