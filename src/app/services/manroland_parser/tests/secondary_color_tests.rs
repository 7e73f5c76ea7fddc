//! Tests for secondary color expansion

use super::*;
use crate::app::services::field_dictionary::SecondarySection;
use crate::app::services::field_dictionary::tests::lab_columns;
use crate::app::services::manroland_parser::secondary_color::{
    SecondaryCandidate, enhance_secondary_color_row, normalize_secondary_color_row,
};

fn secondary_section() -> SecondarySection {
    create_test_dictionary().secondary().clone()
}

fn secondary_raw(cm: [&str; 3], cy: [&str; 3]) -> Record {
    let cell = |value: &str| {
        if value.is_empty() {
            Some(FieldValue::Null)
        } else {
            text(value)
        }
    };
    record(&[
        ("Color", text("T")),
        ("CM L*", cell(cm[0])),
        ("CM a*", cell(cm[1])),
        ("CM b*", cell(cm[2])),
        ("CY L*", cell(cy[0])),
        ("CY a*", cell(cy[1])),
        ("CY b*", cell(cy[2])),
    ])
}

#[test]
fn test_expands_one_record_per_derived_color() {
    let raw = secondary_raw(["24.1", "17.3", "-46.2"], ["48.5", "-66.1", "24.9"]);
    let candidates = normalize_secondary_color_row(&raw, &secondary_section());

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].color_name, "CM");
    assert_eq!(candidates[0].color, "cm");
    assert_eq!(candidates[0].act_l, FieldValue::Number(24.1));
    assert_eq!(candidates[0].act_a, FieldValue::Number(17.3));
    assert_eq!(candidates[0].act_b, FieldValue::Number(-46.2));
    assert_eq!(candidates[1].color_name, "CY");
    assert_eq!(candidates[1].act_a, FieldValue::Number(-66.1));
}

#[test]
fn test_incomplete_triples_are_dropped() {
    let raw = secondary_raw(["24.1", "", "-46.2"], ["48.5", "-66.1", "24.9"]);
    let candidates = normalize_secondary_color_row(&raw, &secondary_section());

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].color_name, "CY");
}

#[test]
fn test_zero_readings_are_dropped() {
    let raw = secondary_raw(["24.1", "0", "-46.2"], ["48.5", "0.0", "24.9"]);
    let candidates = normalize_secondary_color_row(&raw, &secondary_section());
    assert!(candidates.is_empty());
}

#[test]
fn test_missing_columns_are_dropped() {
    let raw = record(&[("CM L*", text("24.1")), ("CM a*", text("17.3"))]);
    let candidates = normalize_secondary_color_row(&raw, &secondary_section());
    assert!(candidates.is_empty());
}

#[test]
fn test_non_numeric_readings_pass_through() {
    let raw = secondary_raw(["n/a", "17.3", "-46.2"], ["", "", ""]);
    let candidates = normalize_secondary_color_row(&raw, &secondary_section());

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].act_l, FieldValue::Text("n/a".to_string()));
}

#[test]
fn test_color_code_casing_is_preserved() {
    let section = SecondarySection::from_entries([("CmY", lab_columns("CMY"))]);
    let raw = record(&[
        ("CMY L*", text("30")),
        ("CMY a*", text("1")),
        ("CMY b*", text("-2")),
    ]);

    let candidates = normalize_secondary_color_row(&raw, &section);
    assert_eq!(candidates[0].color_name, "CmY");
    assert_eq!(candidates[0].color, "cmy");
}

#[test]
fn test_never_emits_falsy_readings() {
    let values = ["", "0", "1.5", "-2", "x"];
    for l in values {
        for a in values {
            for b in values {
                let raw = secondary_raw([l, a, b], ["", "", ""]);
                for candidate in normalize_secondary_color_row(&raw, &secondary_section()) {
                    assert!(candidate.act_l.is_truthy());
                    assert!(candidate.act_a.is_truthy());
                    assert!(candidate.act_b.is_truthy());
                }
            }
        }
    }
}

#[test]
fn test_enhance_copies_position_fields() {
    let candidate = SecondaryCandidate {
        color_name: "MY".to_string(),
        color: "my".to_string(),
        act_l: FieldValue::Number(47.0),
        act_a: FieldValue::Number(68.0),
        act_b: FieldValue::Number(48.0),
    };
    let primary = record(&[
        ("measuringNo", number(1.0)),
        ("color", text("t")),
        ("pUnitNo", number(3.0)),
        ("zoneNo", number(9.0)),
        ("density", None),
    ]);

    let enhanced = enhance_secondary_color_row(candidate, &primary);

    assert_eq!(enhanced.color_name, "MY");
    assert_eq!(enhanced.p_unit_no, number(3.0));
    assert_eq!(enhanced.measuring_no, number(1.0));
    assert_eq!(enhanced.zone_no, number(9.0));
    assert_eq!(enhanced.act_b, FieldValue::Number(48.0));
}

#[test]
fn test_enhance_with_missing_position_fields() {
    let candidate = SecondaryCandidate {
        color_name: "CM".to_string(),
        color: "cm".to_string(),
        act_l: FieldValue::Number(1.0),
        act_a: FieldValue::Number(1.0),
        act_b: FieldValue::Number(1.0),
    };

    let enhanced = enhance_secondary_color_row(candidate, &Record::new());
    assert_eq!(enhanced.p_unit_no, None);
    assert_eq!(enhanced.measuring_no, None);
    assert_eq!(enhanced.zone_no, None);
}
