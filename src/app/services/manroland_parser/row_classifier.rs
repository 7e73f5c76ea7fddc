//! Row classification for manroland exports
//!
//! Exports carry no explicit row type. Metadata lines, the header line and
//! the two kinds of measurement line are told apart by fixed markers in the
//! first two cells.

use crate::app::models::Cell;
use crate::constants::{
    GREY_BALANCE_MARKER, HEADER_ROW_MARKER, RASTER_PERCENT_MARKER, SECONDARY_COLOR_MARKER,
};

/// Text of the cell at `index`, if the row is long enough and it is not null
fn cell_text(row: &[Cell], index: usize) -> Option<&str> {
    row.get(index).and_then(|cell| cell.as_deref())
}

/// Rows that take no part in parsing: the raster percentage line and grey
/// balance rows
pub fn should_skip(row: &[Cell]) -> bool {
    cell_text(row, 0) == Some(RASTER_PERCENT_MARKER) || cell_text(row, 1) == Some(GREY_BALANCE_MARKER)
}

/// The column header row
pub fn is_header_row(row: &[Cell]) -> bool {
    cell_text(row, 0) == Some(HEADER_ROW_MARKER)
}

/// Secondary (overprint) color rows; the marker is case-sensitive
pub fn is_secondary_color_row(row: &[Cell]) -> bool {
    cell_text(row, 1) == Some(SECONDARY_COLOR_MARKER)
}
