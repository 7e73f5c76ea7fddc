//! Field dictionary for O(1) logical-field to source-column lookups
//!
//! The dictionary describes, for every logical output field, which column of
//! the manroland export carries its value. It has three sections:
//! - `meta` - one metadata label per field (first column of the metadata block)
//! - `data` - one header column per field
//! - `secondary` - per derived color, the three columns holding L*, a* and b*
//!
//! A dictionary is loaded once and shared read-only (usually behind an `Arc`)
//! by every parse. Section key lists keep declaration order, which is also
//! the order of fields in the normalized output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod loader;

#[cfg(test)]
pub mod tests;

/// Reference to a single source column
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRef {
    pub source_column_name: String,
}

/// Source columns of one derived (overprint) color
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SecondaryColumns {
    #[serde(rename = "act_L")]
    pub act_l: ColumnRef,

    #[serde(rename = "act_a")]
    pub act_a: ColumnRef,

    #[serde(rename = "act_b")]
    pub act_b: ColumnRef,
}

/// A section mapping logical field names to single source columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSection {
    columns: IndexMap<String, String>,
}

impl FieldSection {
    /// Build a section from `(logical name, source column)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Source column declared for a logical field
    pub fn source_column(&self, logical: &str) -> Option<&str> {
        self.columns.get(logical).map(String::as_str)
    }

    /// Logical field names in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// `(logical name, source column)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn contains(&self, logical: &str) -> bool {
        self.columns.contains_key(logical)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A section mapping derived color codes to their L*a*b* columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondarySection {
    colors: IndexMap<String, SecondaryColumns>,
}

impl SecondarySection {
    /// Build a section from `(color code, columns)` pairs
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, SecondaryColumns)>,
        K: Into<String>,
    {
        Self {
            colors: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Derived colors in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SecondaryColumns)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, color_code: &str) -> Option<&SecondaryColumns> {
        self.colors.get(color_code)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Immutable field dictionary shared by all parses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDictionary {
    /// Dictionary revision, if the resource declares one
    pub(crate) version: Option<String>,

    /// Metadata block labels
    pub(crate) meta: FieldSection,

    /// Data header columns
    pub(crate) data: FieldSection,

    /// Derived color columns
    pub(crate) secondary: SecondarySection,
}

impl FieldDictionary {
    /// Create a dictionary from already-built sections
    pub fn new(meta: FieldSection, data: FieldSection, secondary: SecondarySection) -> Self {
        Self {
            version: None,
            meta,
            data,
            secondary,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn meta(&self) -> &FieldSection {
        &self.meta
    }

    pub fn data(&self) -> &FieldSection {
        &self.data
    }

    pub fn secondary(&self) -> &SecondarySection {
        &self.secondary
    }
}
