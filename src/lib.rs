//! manroland CSV Normalizer Library
//!
//! A Rust library for converting the CSV measurement exports written by manroland
//! press consoles into uniformly named, typed records.
//!
//! This library provides tools for:
//! - Decoding the legacy Windows-1252 export encoding into UTF-8 on the fly
//! - Classifying metadata, header, primary-color and secondary-color rows
//! - Projecting positional columns onto logical fields via a field dictionary
//! - Reconciling the old three-tone-value firmware schema with the current one
//! - Expanding secondary (overprint) color rows into one record per color pair

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_dictionary;
        pub mod manroland_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldValue, MeasurementRow, MetaRecord, Record, SecondaryColorRecord};
pub use app::services::field_dictionary::FieldDictionary;
pub use app::services::manroland_parser::{ManrolandParser, ParseResult, ParseStats};
pub use config::ParserConfig;

/// Result type alias for the manroland normalizer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for manroland export processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV tokenizing error reported by the upstream reader
    #[error("CSV parsing error in '{source_name}': {message}")]
    CsvParsing {
        source_name: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// The stream yielded no usable measurement rows
    #[error("Invalid input '{source_name}': {message}")]
    InvalidInput {
        source_name: String,
        message: String,
    },

    /// Paper type value without a leading grade digit
    #[error("Paper type '{value}' does not contain a paper grade (digit optionally followed by 'F')")]
    PaperType { value: String },

    /// Field dictionary could not be loaded or is inconsistent
    #[error("Field dictionary error: {message}")]
    Dictionary { message: String },

    /// JSON (de)serialization error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            source_name: source_name.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a paper type pattern error
    pub fn paper_type(value: impl Into<String>) -> Self {
        Self::PaperType {
            value: value.into(),
        }
    }

    /// Create a field dictionary error
    pub fn dictionary(message: impl Into<String>) -> Self {
        Self::Dictionary {
            message: message.into(),
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Whether this error means the stream was not a measurement export
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            source_name: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
