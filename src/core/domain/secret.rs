//! Secret record type.
//!
//! Represents one addressable secret: a path and its fields.

use std::collections::BTreeMap;

use crate::core::types::{FieldName, FieldValue, SecretPath};

/// A single secret with its fields.
///
/// Fields are kept in a `BTreeMap` so iteration and serialization are always
/// in sorted field-name order, whatever order they were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretRecord {
    path: SecretPath,
    fields: BTreeMap<FieldName, FieldValue>,
}

impl SecretRecord {
    /// Create a record at `path` from a field mapping.
    pub fn new(path: impl Into<SecretPath>, fields: BTreeMap<FieldName, FieldValue>) -> Self {
        Self {
            path: path.into(),
            fields,
        }
    }

    /// Create a record with no fields.
    pub fn empty(path: impl Into<SecretPath>) -> Self {
        Self::new(path, BTreeMap::new())
    }

    /// Build a record from `(name, value)` pairs.
    pub fn from_pairs<K, V>(path: impl Into<SecretPath>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<FieldName>,
        V: Into<FieldValue>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(path, fields)
    }

    /// Logical location within the store.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Set a field, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<FieldName>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn delete(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// All fields, sorted by name.
    pub fn fields(&self) -> &BTreeMap<FieldName, FieldValue> {
        &self.fields
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl std::fmt::Display for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}
