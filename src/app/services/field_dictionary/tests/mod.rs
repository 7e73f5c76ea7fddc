//! Shared test utilities and fixtures for field dictionary tests

use super::{ColumnRef, FieldDictionary, FieldSection, SecondaryColumns, SecondarySection};
use std::fs;
use std::path::{Path, PathBuf};


/// Column reference shorthand
pub fn column(name: &str) -> ColumnRef {
    ColumnRef {
        source_column_name: name.to_string(),
    }
}

/// L*a*b* columns for a derived color, named "<code> L*" etc.
pub fn lab_columns(code: &str) -> SecondaryColumns {
    SecondaryColumns {
        act_l: column(&format!("{} L*", code)),
        act_a: column(&format!("{} a*", code)),
        act_b: column(&format!("{} b*", code)),
    }
}

/// Small dictionary used across parser tests
pub fn create_test_dictionary() -> FieldDictionary {
    let meta = FieldSection::from_pairs([
        ("jobNo", "Job No :"),
        ("paperType", "Paper Type :"),
        ("sheet", "Sheet No :"),
    ]);
    let data = FieldSection::from_pairs([
        ("measuringNo", "Protocolled Measuring No"),
        ("color", "Color"),
        ("pUnitNo", "Printing Unit"),
        ("zoneNo", "Zone"),
        ("density", "Density"),
        ("tonVal20", "Tone Value 20%"),
        ("tonVal40", "Tone Value 40%"),
        ("tonVal50", "Tone Value 50%"),
        ("tonVal80", "Tone Value 80%"),
    ]);
    let secondary =
        SecondarySection::from_entries([("CM", lab_columns("CM")), ("CY", lab_columns("CY"))]);

    FieldDictionary::new(meta, data, secondary)
}

/// Write a dictionary JSON document into a directory
pub fn write_dictionary_file(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("dictionary.json");
    fs::write(&path, json).unwrap();
    path
}
