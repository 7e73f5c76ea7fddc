//! Field dictionary loading and validation
//!
//! This module handles reading a dictionary resource from JSON, either the
//! copy embedded in the binary or a user-supplied file, and checking that it
//! is usable before it is shared with any parse.

use super::{ColumnRef, FieldDictionary, FieldSection, SecondaryColumns, SecondarySection};
use crate::config::ParserConfig;
use crate::constants::DEFAULT_DICTIONARY_JSON;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// On-disk shape of the dictionary resource
#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    version: Option<String>,
    meta: IndexMap<String, ColumnRef>,
    data: IndexMap<String, ColumnRef>,
    secondary: IndexMap<String, SecondaryColumns>,
}

impl FieldDictionary {
    /// Load the dictionary shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(DEFAULT_DICTIONARY_JSON)
    }

    /// Parse and validate a dictionary from JSON text
    ///
    /// # Errors
    /// * Returns `Error::Json` if the text is not a dictionary document
    /// * Returns `Error::Dictionary` if a section is unusable
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: DictionaryFile = serde_json::from_str(json)
            .map_err(|e| Error::json("Failed to parse field dictionary", e))?;

        let dictionary = Self {
            version: file.version,
            meta: section_from_refs(file.meta),
            data: section_from_refs(file.data),
            secondary: SecondarySection::from_entries(file.secondary),
        };
        dictionary.validate()?;

        debug!(
            "Field dictionary loaded: {} meta, {} data, {} secondary entries",
            dictionary.meta.len(),
            dictionary.data.len(),
            dictionary.secondary.len()
        );
        Ok(dictionary)
    }

    /// Load a dictionary from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read field dictionary {}", path.display()),
                e,
            )
        })?;

        info!("Loading field dictionary from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Resolve the dictionary for a parser configuration
    ///
    /// Lookup order: explicit path, user config directory, embedded copy.
    pub fn resolve(config: &ParserConfig) -> Result<Self> {
        if let Some(path) = &config.dictionary_path {
            return Self::from_path(path);
        }

        if let Some(path) = ParserConfig::user_dictionary_path() {
            if path.exists() {
                return Self::from_path(&path);
            }
        }

        debug!("Using embedded field dictionary");
        Self::embedded()
    }

    /// Check that every section is usable
    pub fn validate(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(Error::dictionary("data section declares no fields"));
        }

        for (section_name, section) in [("meta", &self.meta), ("data", &self.data)] {
            for (logical, column) in section.iter() {
                if column.trim().is_empty() {
                    return Err(Error::dictionary(format!(
                        "{} field '{}' has an empty source column name",
                        section_name, logical
                    )));
                }
            }
        }

        let mut seen = HashSet::new();
        for (color, columns) in self.secondary.iter() {
            if color.is_empty() {
                return Err(Error::dictionary("secondary section has an empty color code"));
            }
            if !seen.insert(color.to_lowercase()) {
                return Err(Error::dictionary(format!(
                    "secondary color '{}' is declared twice (case-insensitively)",
                    color
                )));
            }
            for column in [&columns.act_l, &columns.act_a, &columns.act_b] {
                if column.source_column_name.trim().is_empty() {
                    return Err(Error::dictionary(format!(
                        "secondary color '{}' has an empty source column name",
                        color
                    )));
                }
            }
        }

        Ok(())
    }
}

fn section_from_refs(refs: IndexMap<String, ColumnRef>) -> FieldSection {
    FieldSection::from_pairs(
        refs.into_iter()
            .map(|(logical, column)| (logical, column.source_column_name)),
    )
}
