//! manroland export parser
//!
//! This module turns the CSV exports of manroland press consoles into
//! normalized metadata and measurement records.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Entry points, decoding and tokenizing
//! - [`session`] - Per-parse state machine (metadata block, header, data)
//! - [`row_classifier`] - Skip, header and secondary color row detection
//! - [`column_mapping`] - Header capture and positional-to-named mapping
//! - [`header`] - Metadata block accumulation and machine identification
//! - [`record_parser`] - Dictionary projection and tone value reconciliation
//! - [`secondary_color`] - Expansion of overprint color rows
//! - [`field_parsers`] - Number-like detection and coercion
//! - [`decoding`] - Streaming Windows-1252 to UTF-8 decoding
//! - [`stats`] - Parse result and row counters
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use manroland_csv::{FieldDictionary, ManrolandParser};
//!
//! # fn example() -> manroland_csv::Result<()> {
//! let parser = ManrolandParser::new(Arc::new(FieldDictionary::embedded()?));
//! let export = b"Job No :,4711\nProtocolled Measuring No,Color,Zone\n1,Cyan,1\n";
//! let result = parser.parse_bytes(export, Some("R508_job.csv"))?;
//!
//! assert_eq!(result.meta.machine, "R508");
//! assert_eq!(result.values.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod column_mapping;
pub mod decoding;
pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod row_classifier;
pub mod secondary_color;
pub mod session;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{HeaderSet, map_to_headers};
pub use header::{MetadataBlock, get_machine_name};
pub use parser::ManrolandParser;
pub use record_parser::{correct_old_tonval, normalize_data_row, normalize_meta};
pub use row_classifier::{is_header_row, is_secondary_color_row, should_skip};
pub use secondary_color::{enhance_secondary_color_row, normalize_secondary_color_row};
pub use session::{ParseSession, ParseState};
pub use stats::{ParseResult, ParseStats};
