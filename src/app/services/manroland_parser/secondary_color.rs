//! Secondary (overprint) color expansion
//!
//! A single "T" row of an export carries L*a*b* readings for every derived
//! color pair side by side. Each pair declared in the dictionary becomes an
//! independent output record, provided all three readings are present.

use super::field_parsers::coerce_optional;
use crate::app::models::{FieldValue, Record, SecondaryColorRecord};
use crate::app::services::field_dictionary::SecondarySection;
use crate::constants::fields;

/// A derived color taken from a secondary row, before enhancement
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryCandidate {
    pub color_name: String,
    pub color: String,
    pub act_l: FieldValue,
    pub act_a: FieldValue,
    pub act_b: FieldValue,
}

/// Build one candidate per declared derived color
///
/// Candidates keep dictionary declaration order. A derived color is dropped
/// when any of its three readings is falsy: undefined, null, empty or zero.
pub fn normalize_secondary_color_row(
    raw: &Record,
    section: &SecondarySection,
) -> Vec<SecondaryCandidate> {
    let reading = |column: &str| coerce_optional(raw.get(column).cloned().flatten());

    section
        .iter()
        .filter_map(|(code, columns)| {
            let act_l = reading(&columns.act_l.source_column_name)?;
            let act_a = reading(&columns.act_a.source_column_name)?;
            let act_b = reading(&columns.act_b.source_column_name)?;

            if !(act_l.is_truthy() && act_a.is_truthy() && act_b.is_truthy()) {
                return None;
            }

            Some(SecondaryCandidate {
                color_name: code.to_string(),
                color: code.to_lowercase(),
                act_l,
                act_a,
                act_b,
            })
        })
        .collect()
}

/// Copy the position fields of the sibling primary row onto a candidate
pub fn enhance_secondary_color_row(
    candidate: SecondaryCandidate,
    primary: &Record,
) -> SecondaryColorRecord {
    let position = |field: &str| primary.get(field).cloned().flatten();

    SecondaryColorRecord {
        color_name: candidate.color_name,
        color: candidate.color,
        act_l: candidate.act_l,
        act_a: candidate.act_a,
        act_b: candidate.act_b,
        p_unit_no: position(fields::P_UNIT_NO),
        measuring_no: position(fields::MEASURING_NO),
        zone_no: position(fields::ZONE_NO),
    }
}
