//! Data models for manroland export processing
//!
//! This module contains the value and record types produced by the parser:
//! raw positional rows, typed field values, normalized metadata and the two
//! shapes of measurement row (primary and secondary color).

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// Raw Rows
// =============================================================================

/// A single CSV cell; `None` is the null marker for an empty field
pub type Cell = Option<String>;

/// A positional, untyped CSV row as delivered by the tokenizer
pub type RawRow = Vec<Cell>;

// =============================================================================
// Field Values
// =============================================================================

/// Typed value of a named field
///
/// Serialized untagged, so records render as plain JSON objects. Whole
/// numbers are written as integers (`3`, not `3.0`).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Number-like cell text coerced to a number
    Number(f64),
    /// Any other cell text, passed through unchanged
    Text(String),
    /// Empty CSV field
    Null,
}

impl FieldValue {
    /// Wrap a raw cell without numeric coercion
    pub fn from_cell(cell: &Cell) -> Self {
        match cell {
            Some(text) => FieldValue::Text(text.clone()),
            None => FieldValue::Null,
        }
    }

    /// JavaScript-style truthiness: zero, NaN, empty text and null are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Null => false,
        }
    }

    /// Borrow the text payload, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Number(n) => match as_whole_number(*n) {
                Some(whole) => serializer.serialize_i64(whole),
                None => serializer.serialize_f64(*n),
            },
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Null => serializer.serialize_unit(),
        }
    }
}

/// `n` as an `i64` when it is finite, has no fractional part and fits
fn as_whole_number(n: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

/// Truthiness of an optional field; undefined is falsy
pub fn is_truthy(value: &Option<FieldValue>) -> bool {
    value.as_ref().is_some_and(FieldValue::is_truthy)
}

/// Named-field object
///
/// An entry holding `None` is declared but undefined (the source column was
/// absent); `Some(FieldValue::Null)` is a defined, empty cell.
pub type Record = IndexMap<String, Option<FieldValue>>;

// =============================================================================
// Normalized Output
// =============================================================================

/// Normalized metadata block of one export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaRecord {
    /// Constant identifier of the source system
    pub maker: String,

    /// Machine identifier taken from the file name (may be empty)
    pub machine: String,

    /// Every logical field declared in the dictionary's meta section
    #[serde(flatten)]
    pub fields: Record,
}

impl MetaRecord {
    /// Look up a logical metadata field
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field).and_then(Option::as_ref)
    }
}

/// One derived color taken from a secondary color row, enhanced with the
/// position fields of its sibling primary row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecondaryColorRecord {
    /// Derived color code exactly as declared in the dictionary (e.g. "CM")
    #[serde(rename = "colorName")]
    pub color_name: String,

    /// Lower-cased derived color code
    pub color: String,

    #[serde(rename = "act_L")]
    pub act_l: FieldValue,

    #[serde(rename = "act_a")]
    pub act_a: FieldValue,

    #[serde(rename = "act_b")]
    pub act_b: FieldValue,

    #[serde(rename = "pUnitNo")]
    pub p_unit_no: Option<FieldValue>,

    #[serde(rename = "measuringNo")]
    pub measuring_no: Option<FieldValue>,

    #[serde(rename = "zoneNo")]
    pub zone_no: Option<FieldValue>,
}

/// A single normalized measurement row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MeasurementRow {
    /// Primary (process ink) color row
    Primary(Record),
    /// One derived color of a secondary color row
    Secondary(SecondaryColorRecord),
}

impl MeasurementRow {
    pub fn as_primary(&self) -> Option<&Record> {
        match self {
            MeasurementRow::Primary(record) => Some(record),
            MeasurementRow::Secondary(_) => None,
        }
    }

    pub fn as_secondary(&self) -> Option<&SecondaryColorRecord> {
        match self {
            MeasurementRow::Secondary(record) => Some(record),
            MeasurementRow::Primary(_) => None,
        }
    }

    pub fn is_secondary(&self) -> bool {
        matches!(self, MeasurementRow::Secondary(_))
    }
}
