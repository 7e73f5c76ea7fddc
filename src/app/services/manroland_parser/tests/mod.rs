//! Test utilities and fixtures for manroland parser testing
//!
//! This module provides row builders, export fixtures and helper functions
//! used across the parser test modules.

use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

use crate::app::models::{FieldValue, RawRow, Record};
use crate::app::services::field_dictionary::FieldDictionary;
use crate::app::services::manroland_parser::ManrolandParser;

pub use crate::app::services::field_dictionary::tests::create_test_dictionary;

// Test modules
mod column_mapping_tests;
mod row_classifier_tests;
mod secondary_color_tests;

/// Build a raw row; empty strings become null cells
pub fn row(cells: &[&str]) -> RawRow {
    cells
        .iter()
        .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
        .collect()
}

/// Text field value shorthand
pub fn text(value: &str) -> Option<FieldValue> {
    Some(FieldValue::Text(value.to_string()))
}

/// Number field value shorthand
pub fn number(value: f64) -> Option<FieldValue> {
    Some(FieldValue::Number(value))
}

/// Build a named-field record from text values
pub fn record(pairs: &[(&str, Option<FieldValue>)]) -> Record {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// Parser over the small test dictionary
pub fn create_test_parser() -> ManrolandParser {
    ManrolandParser::new(Arc::new(create_test_dictionary()))
}

/// Header row of a current-firmware export for the test dictionary
pub const CURRENT_HEADER: &str = "Protocolled Measuring No,Color,Printing Unit,Zone,Density,Tone Value 40%,Tone Value 80%,CM L*,CM a*,CM b*,CY L*,CY a*,CY b*";

/// Complete current-firmware export: 3 metadata lines, 2 primary rows,
/// 1 grey balance row and 1 secondary row carrying two derived colors
pub fn create_test_export() -> String {
    format!(
        "Job No :,4711\n\
         Paper Type :,3F - uncoated\n\
         Sheet No :, 12-34 \n\
         Raster-Percent :,40,80\n\
         {}\n\
         1,Cyan,1,1,1.45,14.2,12.1,,,,,,\n\
         1,Magenta,2,1,1.52,15.0,11.8,,,,,,\n\
         1,GB,0,1,,,,,,,,,\n\
         1,T,3,1,,,,24.1,17.3,-46.2,48.5,-66.1,24.9\n",
        CURRENT_HEADER
    )
}

/// Old-firmware export reporting tone values at 20%, 50% and 80%
pub fn create_old_firmware_export() -> String {
    "Job No :,0815\n\
     Paper Type :,1 - gloss coated\n\
     Protocolled Measuring No,Color,Printing Unit,Zone,Density,Tone Value 20%,Tone Value 50%,Tone Value 80%\n\
     4,Yellow,4,7,1.01,9.5,17.25,11.0\n\
     4,Black,5,7,1.80,10.5,18.75,12.5\n"
        .to_string()
}

/// Create a temporary `.csv` file with given content and file name prefix
pub fn create_temp_file(content: &[u8], prefix: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".csv")
        .tempfile()
        .unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}

/// Convenience: the dictionary shipped with the crate
pub fn embedded_dictionary() -> FieldDictionary {
    FieldDictionary::embedded().unwrap()
}
