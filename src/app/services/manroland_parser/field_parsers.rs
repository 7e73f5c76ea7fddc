//! Field parsing utilities for manroland export rows
//!
//! Cells arrive as text; these helpers decide which texts are numbers and
//! coerce them, leaving everything else untouched.

use crate::app::models::FieldValue;
use crate::constants::NUMBER_LIKE_PATTERN;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(NUMBER_LIKE_PATTERN).expect("number-like pattern is a valid regex")
});

/// Whether cell text reads as a number
///
/// Accepts signed integers and decimals with an optional exponent, ignoring
/// surrounding whitespace. `Infinity`, `NaN`, hex literals and blank text are
/// not number-like.
pub fn is_number_like(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && NUMBER_LIKE.is_match(trimmed)
}

/// Parse number-like text, `None` otherwise
pub fn parse_number(text: &str) -> Option<f64> {
    if is_number_like(text) {
        text.trim().parse::<f64>().ok()
    } else {
        None
    }
}

/// Coerce a text value to a number when it is number-like
pub fn coerce_value(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(text) => match parse_number(&text) {
            Some(number) => FieldValue::Number(number),
            None => FieldValue::Text(text),
        },
        other => other,
    }
}

/// Coerce an optional value; undefined stays undefined
pub fn coerce_optional(value: Option<FieldValue>) -> Option<FieldValue> {
    value.map(coerce_value)
}

/// Lower-case a text value, leaving numbers and nulls untouched
pub fn lowercase_value(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(text) => FieldValue::Text(text.to_lowercase()),
        other => other,
    }
}
