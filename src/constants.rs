//! Application constants for the manroland normalizer
//!
//! This module contains the row markers, field names and default values
//! used throughout the parser and the command-line tool.

// =============================================================================
// Source System
// =============================================================================

/// Constant `maker` identifier injected into every metadata record
pub const MAKER: &str = "manroland";

/// Encoding label of the press console exports (WHATWG label)
pub const DEFAULT_SOURCE_ENCODING: &str = "windows-1252";

/// Default CSV field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Source name used in errors when no filename is known
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

// =============================================================================
// Row Markers
// =============================================================================

/// First-column label of the raster percentage line (not metadata, not data)
pub const RASTER_PERCENT_MARKER: &str = "Raster-Percent :";

/// Second-column marker of grey balance rows
pub const GREY_BALANCE_MARKER: &str = "GB";

/// First-column label of the column header row
pub const HEADER_ROW_MARKER: &str = "Protocolled Measuring No";

/// Second-column marker of secondary (overprint) color rows
pub const SECONDARY_COLOR_MARKER: &str = "T";

// =============================================================================
// Logical Field Names
// =============================================================================

/// Logical field names referenced by the normalizer
pub mod fields {
    /// Metadata field reduced to its paper grade
    pub const PAPER_TYPE: &str = "paperType";

    /// Metadata field stripped of hyphens
    pub const SHEET: &str = "sheet";

    /// Data field lower-cased during normalization
    pub const COLOR: &str = "color";

    /// Tone value at 40% (current firmware)
    pub const TON_VAL_40: &str = "tonVal40";

    /// Tone value at 50% (old firmware)
    pub const TON_VAL_50: &str = "tonVal50";

    /// Tone value at 20% (old firmware)
    pub const TON_VAL_20: &str = "tonVal20";

    /// Printing unit number copied onto secondary color records
    pub const P_UNIT_NO: &str = "pUnitNo";

    /// Measuring number copied onto secondary color records
    pub const MEASURING_NO: &str = "measuringNo";

    /// Zone number copied onto secondary color records
    pub const ZONE_NO: &str = "zoneNo";
}

// =============================================================================
// Patterns
// =============================================================================

// Digit classes below are ASCII-only

/// Machine identifier embedded in export file names (e.g. "R508")
pub const MACHINE_NAME_PATTERN: &str = r"(?i)r[0-9]{3}";

/// Paper grade: one digit, optionally followed by "F"
pub const PAPER_TYPE_PATTERN: &str = r"[0-9]F?";

/// Number-like cell text (integer or decimal, optional sign and exponent)
pub const NUMBER_LIKE_PATTERN: &str = r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$";

// =============================================================================
// Configuration
// =============================================================================

/// Field dictionary shipped with the crate
pub const DEFAULT_DICTIONARY_JSON: &str = include_str!("../config/dictionary.json");

/// Application directory name below the user configuration directory
pub const CONFIG_DIR_NAME: &str = "manroland-csv";

/// File name of a user-provided dictionary override
pub const DICTIONARY_FILE_NAME: &str = "dictionary.json";
