//! In-memory secret store.
//!
//! Holds secrets in a sorted map. Used as a test double and for dry runs.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{is_within, normalize, SecretStore};
use crate::core::domain::SecretRecord;
use crate::core::types::{FieldName, FieldValue, SecretPath};
use crate::error::{Result, StoreError};

/// In-memory store.
#[derive(Debug, Default)]
pub struct Memory {
    secrets: RefCell<BTreeMap<SecretPath, BTreeMap<FieldName, FieldValue>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `(path, fields)` pairs.
    pub fn with_secrets<'a>(
        secrets: impl IntoIterator<Item = (&'a str, &'a [(&'a str, &'a str)])>,
    ) -> Self {
        let store = Self::new();
        for (path, pairs) in secrets {
            let record = SecretRecord::from_pairs(path, pairs.iter().copied());
            store.secrets.borrow_mut().insert(normalize(path), record.fields().clone());
        }
        store
    }

    /// Number of stored secrets
    pub fn len(&self) -> usize {
        self.secrets.borrow().len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.secrets.borrow().is_empty()
    }
}

impl SecretStore for Memory {
    fn list(&self, path: &str) -> Result<Vec<SecretPath>> {
        let root = normalize(path);
        let found: Vec<SecretPath> = self
            .secrets
            .borrow()
            .keys()
            .filter(|candidate| is_within(&root, candidate))
            .cloned()
            .collect();

        if found.is_empty() {
            return Err(StoreError::NotFound(root).into());
        }
        Ok(found)
    }

    fn read(&self, path: &str) -> Result<SecretRecord> {
        let path = normalize(path);
        let fields = self
            .secrets
            .borrow()
            .get(&path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.clone()))?;
        Ok(SecretRecord::new(path, fields))
    }

    fn write(&self, path: &str, secret: &SecretRecord) -> Result<()> {
        self.secrets
            .borrow_mut()
            .insert(normalize(path), secret.fields().clone());
        Ok(())
    }
}
