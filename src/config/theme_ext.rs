//! Theme extension tables.
//!
//! Extensions are named overrides/additions to a base design-token table,
//! keyed by category (e.g. `gridTemplateColumns`) and then by token name.
//! Duplicate token names within a category are a validation failure:
//! last-write-wins is disallowed, so the raw layer deserializes token
//! tables as entry lists instead of maps, keeping duplicates visible for
//! the validation pass.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Validated theme extension tables.
///
/// Immutable once constructed; iteration order is the category/token name
/// order, so output derived from the tables is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeExtensions(BTreeMap<String, BTreeMap<String, String>>);

impl ThemeExtensions {
    /// Returns the token table for a category, if present.
    pub fn category(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.0.get(name)
    }

    /// Returns the value of a single token.
    ///
    /// # Example
    ///
    /// ```rust
    /// let config = swatch::load(r#"{
    ///     "contentGlobs": ["./src/**/*.rs"],
    ///     "themeExtensions": {
    ///         "gridTemplateColumns": { "fit-keystone": "repeat(auto-fit, minmax(min(25ch, 100%), 1fr))" }
    ///     }
    /// }"#).unwrap();
    ///
    /// let columns = config
    ///     .theme_extensions()
    ///     .token("gridTemplateColumns", "fit-keystone");
    /// assert!(columns.unwrap().starts_with("repeat("));
    /// ```
    pub fn token(&self, category: &str, name: &str) -> Option<&str> {
        self.0.get(category)?.get(name).map(String::as_str)
    }

    /// Iterates over categories and their token tables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, String>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Builds the validated tables from raw entries, rejecting duplicate
    /// token names within a category. Entries for a repeated category name
    /// are merged before the duplicate check.
    pub(crate) fn from_entries(
        entries: Vec<(String, Vec<(String, String)>)>,
    ) -> Result<Self, ValidationError> {
        let mut categories: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (category, tokens) in entries {
            let table = categories.entry(category.clone()).or_default();
            for (token, value) in tokens {
                if table.insert(token.clone(), value).is_some() {
                    return Err(ValidationError::DuplicateToken { category, token });
                }
            }
        }
        Ok(Self(categories))
    }
}

/// Raw token table: every `(name, value)` pair as parsed, duplicates kept.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawTokenTable(pub(crate) Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawTokenTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = RawTokenTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of token names to CSS values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(RawTokenTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// Raw extension tables: category entries as parsed, duplicates kept.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawExtensions(pub(crate) Vec<(String, RawTokenTable)>);

impl RawExtensions {
    pub(crate) fn into_entries(self) -> Vec<(String, Vec<(String, String)>)> {
        self.0
            .into_iter()
            .map(|(category, table)| (category, table.0))
            .collect()
    }
}

impl<'de> Deserialize<'de> for RawExtensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExtensionsVisitor;

        impl<'de> Visitor<'de> for ExtensionsVisitor {
            type Value = RawExtensions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of extension categories to token tables")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, RawTokenTable>()? {
                    entries.push(entry);
                }
                Ok(RawExtensions(entries))
            }
        }

        deserializer.deserialize_map(ExtensionsVisitor)
    }
}
