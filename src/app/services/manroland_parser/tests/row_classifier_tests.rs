//! Tests for row classification

use super::*;
use crate::app::services::manroland_parser::row_classifier::{
    is_header_row, is_secondary_color_row, should_skip,
};

#[test]
fn test_should_skip_raster_percent_line() {
    assert!(should_skip(&row(&["Raster-Percent :", "bar"])));
}

#[test]
fn test_should_skip_grey_balance_row() {
    assert!(should_skip(&row(&["foo", "GB"])));
}

#[test]
fn test_should_not_skip_ordinary_rows() {
    assert!(!should_skip(&row(&["foo", "bar"])));
    assert!(!should_skip(&row(&["Raster-Percent", "bar"])));
    assert!(!should_skip(&row(&["foo", "gb"])));
}

#[test]
fn test_short_and_null_rows_are_not_markers() {
    assert!(!should_skip(&row(&[])));
    assert!(!should_skip(&row(&["foo"])));
    assert!(!should_skip(&row(&["", ""])));
    assert!(!is_header_row(&row(&[])));
    assert!(!is_secondary_color_row(&row(&["42"])));
}

#[test]
fn test_is_header_row() {
    assert!(is_header_row(&row(&["Protocolled Measuring No", "Color"])));
    assert!(!is_header_row(&row(&["Color", "Protocolled Measuring No"])));
    assert!(!is_header_row(&row(&["protocolled measuring no"])));
}

#[test]
fn test_is_secondary_color_row_is_case_sensitive() {
    assert!(is_secondary_color_row(&row(&["42", "T"])));
    assert!(!is_secondary_color_row(&row(&["42", "t"])));
    assert!(!is_secondary_color_row(&row(&["42", "T "])));
    assert!(!is_secondary_color_row(&row(&["T", "Cyan"])));
}
