//! Dictionary-driven normalization of metadata and primary data rows
//!
//! Named-field records coming from the header mapper (or the metadata block)
//! are projected onto the logical fields declared in the field dictionary.
//! Only declared fields appear in the output, in declaration order.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::field_parsers::{coerce_optional, lowercase_value};
use crate::app::models::{FieldValue, Record};
use crate::app::services::field_dictionary::FieldSection;
use crate::constants::{PAPER_TYPE_PATTERN, fields};
use crate::{Error, Result};

static PAPER_GRADE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PAPER_TYPE_PATTERN).expect("paper type pattern is a valid regex")
});

/// Project a raw record onto a dictionary section without any coercion
fn project(raw: &Record, section: &FieldSection) -> Record {
    section
        .iter()
        .map(|(logical, source)| {
            let value = raw.get(source).cloned().flatten();
            (logical.to_string(), value)
        })
        .collect()
}

/// Normalize the metadata block against the dictionary's meta section
///
/// `paperType` is reduced to its paper grade (a digit, optionally followed by
/// "F") and `sheet` loses its hyphens and surrounding whitespace.
///
/// # Errors
/// * Returns `Error::PaperType` if a paper type is given but carries no grade
pub fn normalize_meta(raw: &Record, section: &FieldSection) -> Result<Record> {
    let mut record = project(raw, section);

    if let Some(slot) = record.get_mut(fields::PAPER_TYPE) {
        if let Some(value) = slot.take() {
            *slot = Some(extract_paper_grade(value)?);
        }
    }

    if let Some(Some(FieldValue::Text(sheet))) = record.get_mut(fields::SHEET) {
        *sheet = sheet.replace('-', "").trim().to_string();
    }

    Ok(record)
}

fn extract_paper_grade(value: FieldValue) -> Result<FieldValue> {
    let text = match value {
        FieldValue::Null => return Ok(FieldValue::Null),
        FieldValue::Text(text) => text,
        FieldValue::Number(number) => number.to_string(),
    };

    PAPER_GRADE
        .find(&text)
        .map(|grade| FieldValue::Text(grade.as_str().to_string()))
        .ok_or_else(|| Error::paper_type(text.clone()))
}

/// Normalize a mapped data row against the dictionary's data section
///
/// Number-like values become numbers and the `color` value is lower-cased.
pub fn normalize_data_row(raw: &Record, section: &FieldSection) -> Record {
    section
        .iter()
        .map(|(logical, source)| {
            let value = coerce_optional(raw.get(source).cloned().flatten());
            let value = if logical == fields::COLOR {
                value.map(lowercase_value)
            } else {
                value
            };
            (logical.to_string(), value)
        })
        .collect()
}

/// Rewrite an old-firmware row into the current tone value schema
///
/// Old firmware reported tone values at 50% and 20% instead of 40%. When
/// `tonVal40` is undefined, the 50% reading moves into `tonVal40` and both
/// old keys are removed; the 20% reading has no counterpart and is dropped.
/// Rows with a defined `tonVal40` (even null or zero) are returned unchanged.
pub fn correct_old_tonval(mut record: Record) -> Record {
    if matches!(record.get(fields::TON_VAL_40), Some(Some(_))) {
        return record;
    }

    let ton_val_50 = record.shift_remove(fields::TON_VAL_50).flatten();
    record.shift_remove(fields::TON_VAL_20);
    debug!("Reconciled old tone value schema (tonVal50 -> tonVal40)");
    record.insert(fields::TON_VAL_40.to_string(), ton_val_50);
    record
}

/// Whether a normalized row uses the old tone value schema
pub fn is_old_tonval_schema(record: &Record) -> bool {
    !matches!(record.get(fields::TON_VAL_40), Some(Some(_)))
}
