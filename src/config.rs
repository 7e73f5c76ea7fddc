//! Configuration management and validation.
//!
//! Provides the parser configuration: where the field dictionary comes from,
//! how the raw export bytes are decoded and how they are tokenized.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_DELIMITER, DEFAULT_SOURCE_ENCODING, DICTIONARY_FILE_NAME,
};
use crate::{Error, Result};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Settings for a [`ManrolandParser`](crate::ManrolandParser)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Explicit field dictionary file; overrides the user and embedded copies
    pub dictionary_path: Option<PathBuf>,

    /// WHATWG label of the export encoding
    pub source_encoding: String,

    /// CSV field delimiter
    pub delimiter: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            source_encoding: DEFAULT_SOURCE_ENCODING.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ParserConfig {
    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    pub fn with_source_encoding(mut self, label: impl Into<String>) -> Self {
        self.source_encoding = label.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Location of a user-provided dictionary override, if the platform has
    /// a configuration directory
    pub fn user_dictionary_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(DICTIONARY_FILE_NAME))
    }

    /// Resolve the configured source encoding
    pub fn encoding(&self) -> Result<&'static Encoding> {
        Encoding::for_label(self.source_encoding.as_bytes()).ok_or_else(|| {
            Error::configuration(format!(
                "Unknown source encoding '{}'",
                self.source_encoding
            ))
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.encoding()?;

        if self.delimiter == b'"' || self.delimiter == b'\n' || self.delimiter == b'\r' {
            return Err(Error::configuration(format!(
                "Delimiter {:?} cannot be used for CSV fields",
                self.delimiter as char
            )));
        }

        debug!(
            "Parser configuration valid: encoding={}, delimiter={:?}",
            self.source_encoding, self.delimiter as char
        );
        Ok(())
    }
}
