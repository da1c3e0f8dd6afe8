//! Secret transformation.
//!
//! Filters and renames the fields of a secret according to a [`KeyMap`].
//! [`validate`] must pass before [`apply`] is called.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::core::domain::SecretRecord;
use crate::core::keymap::KeyMap;
use crate::error::{Result, ValidationError};

/// Check a key map against a secret.
///
/// All checks run and every defect is reported in one error:
/// - destination keys produced by more than one source key
/// - source keys missing from the secret
/// - renamed keys whose source is the destination of another rename
///
/// Identity entries never count as circular.
///
/// # Errors
///
/// Returns `ValidationError` naming the secret by its path.
pub fn validate(secret: &SecretRecord, key_map: &KeyMap) -> Result<()> {
    if key_map.is_empty() {
        return Ok(());
    }

    let mut dest_refs: BTreeMap<&str, usize> = BTreeMap::new();
    let mut missing = BTreeSet::new();
    for entry in key_map.entries() {
        *dest_refs.entry(entry.dest.as_str()).or_default() += 1;
        if !secret.has(&entry.source) {
            missing.insert(entry.source.clone());
        }
    }

    let duplicates: Vec<String> = dest_refs
        .into_iter()
        .filter(|(_, refs)| *refs > 1)
        .map(|(dest, _)| dest.to_string())
        .collect();

    let renamed_dests: BTreeSet<&str> = key_map
        .entries()
        .iter()
        .filter(|e| !e.is_identity())
        .map(|e| e.dest.as_str())
        .collect();
    let circular: BTreeSet<String> = key_map
        .entries()
        .iter()
        .filter(|e| !e.is_identity() && renamed_dests.contains(e.source.as_str()))
        .map(|e| e.source.clone())
        .collect();

    let report = ValidationError {
        secret: secret.path().to_string(),
        duplicate_destinations: duplicates,
        missing_keys: missing.into_iter().collect(),
        circular_keys: circular.into_iter().collect(),
    };

    if report.is_empty() {
        Ok(())
    } else {
        Err(report.into())
    }
}

/// Produce the record to write.
///
/// With an empty map the secret is copied unchanged. Otherwise only mapped
/// fields are kept, each under its destination name. The input is never
/// modified.
pub fn apply(secret: &SecretRecord, key_map: &KeyMap) -> SecretRecord {
    if key_map.is_empty() {
        return secret.clone();
    }

    let mut transformed = SecretRecord::empty(secret.path());
    for (name, value) in secret.fields() {
        if let Some(dest) = key_map.dest_for(name) {
            transformed.set(dest, value.as_str());
        }
    }

    debug!(
        secret = %secret,
        kept = transformed.len(),
        dropped = secret.len() - transformed.len(),
        "transformed secret"
    );
    transformed
}
