//! Key map resolution.
//!
//! Turns the `keys` list of a secret map into a source → destination mapping.
//! Field existence is not checked here; see [`crate::core::transform`].

use tracing::debug;

use crate::core::domain::KeySpec;
use crate::core::types::FieldName;
use crate::error::{KeyMapError, Result};

/// One resolved mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMapping {
    pub source: FieldName,
    pub dest: FieldName,
}

impl KeyMapping {
    /// Whether the field keeps its name.
    pub fn is_identity(&self) -> bool {
        self.source == self.dest
    }
}

/// Resolved key mapping.
///
/// An empty map means "copy every field unchanged". Entries keep the order
/// they were specified in, and a source key named twice keeps its last
/// destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMap {
    entries: Vec<KeyMapping>,
}

impl KeyMap {
    /// Resolve key specifications into a map.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::MultiKeyRename` if a rename names more than one
    /// pair, or `KeyMapError::InvalidKeySpec` if it names none.
    pub fn resolve(specs: &[KeySpec]) -> Result<Self> {
        let mut map = Self::default();

        for spec in specs {
            match spec {
                KeySpec::Identity(name) => map.insert(name.clone(), name.clone()),
                KeySpec::Rename(pairs) => {
                    if pairs.len() > 1 {
                        return Err(KeyMapError::MultiKeyRename(spec.to_string()).into());
                    }
                    let (from, to) = pairs
                        .iter()
                        .next()
                        .ok_or_else(|| KeyMapError::InvalidKeySpec("an empty object".to_string()))?;
                    map.insert(from.clone(), to.clone());
                }
            }
        }

        debug!(entries = map.len(), "resolved key map");
        Ok(map)
    }

    fn insert(&mut self, source: FieldName, dest: FieldName) {
        match self.entries.iter_mut().find(|e| e.source == source) {
            Some(entry) => entry.dest = dest,
            None => self.entries.push(KeyMapping { source, dest }),
        }
    }

    /// Destination for a source field, if mapped.
    pub fn dest_for(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.source == source)
            .map(|e| e.dest.as_str())
    }

    /// All entries in the order given.
    pub fn entries(&self) -> &[KeyMapping] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
