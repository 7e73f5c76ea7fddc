//! Tests for header capture and row mapping

use super::*;
use crate::app::services::manroland_parser::column_mapping::{HeaderSet, map_to_headers};

#[test]
fn test_map_to_headers_zips_by_position() {
    let headers = row(&["Zone", "Color", "Density"]);
    let mapped = map_to_headers(&row(&["3", "Cyan", "1.45"]), &headers);

    let keys: Vec<&str> = mapped.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Zone", "Color", "Density"]);
    assert_eq!(mapped["Zone"], text("3"));
    assert_eq!(mapped["Density"], text("1.45"));
}

#[test]
fn test_extra_cells_are_dropped() {
    let headers = row(&["Zone", "Color"]);
    let mapped = map_to_headers(&row(&["3", "Cyan", "surplus", "more"]), &headers);

    assert_eq!(mapped.len(), 2);
    assert!(!mapped.values().any(|v| v == &text("surplus")));
}

#[test]
fn test_missing_trailing_cells_get_no_entry() {
    let headers = row(&["Zone", "Color", "Density"]);
    let mapped = map_to_headers(&row(&["3"]), &headers);

    assert_eq!(mapped.len(), 1);
    assert!(!mapped.contains_key("Color"));
    assert!(!mapped.contains_key("Density"));
}

#[test]
fn test_null_cells_map_to_null_values() {
    let headers = row(&["Zone", "Color"]);
    let mapped = map_to_headers(&row(&["3", ""]), &headers);

    assert_eq!(mapped["Color"], Some(FieldValue::Null));
}

#[test]
fn test_null_headers_bind_nothing() {
    let headers = row(&["Zone", "", "Density"]);
    let mapped = map_to_headers(&row(&["3", "orphan", "1.2"]), &headers);

    assert_eq!(mapped.len(), 2);
    assert_eq!(mapped["Density"], text("1.2"));
}

#[test]
fn test_map_to_headers_does_not_mutate_inputs() {
    let headers = row(&["Zone", "Color"]);
    let data = row(&["3", "Cyan", "extra"]);
    let headers_before = headers.clone();
    let data_before = data.clone();

    let _ = map_to_headers(&data, &headers);

    assert_eq!(headers, headers_before);
    assert_eq!(data, data_before);
}

#[test]
fn test_header_set_appends_fragments() {
    let mut headers = HeaderSet::new();
    assert!(headers.is_empty());

    headers.extend_from_row(&row(&["Protocolled Measuring No", "Color"]));
    headers.extend_from_row(&row(&["Zone"]));

    assert_eq!(headers.len(), 3);
    assert_eq!(headers.position("Color"), Some(1));
    assert_eq!(headers.position("Zone"), Some(2));

    let mapped = headers.map_row(&row(&["1", "Cyan", "4"]));
    assert_eq!(mapped["Zone"], text("4"));
}
