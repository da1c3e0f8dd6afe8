//! Secret tree fetching.
//!
//! Collects every leaf secret under a set of root paths into one list sorted
//! by path, so downstream fingerprints never depend on enumeration order.

use tracing::{debug, info};

use crate::core::domain::SecretRecord;
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

/// Fetch every secret at or below each root and merge the results.
///
/// Fails fast: the first list or read error aborts the whole fetch.
///
/// # Errors
///
/// Returns the store's error, or `Error::DuplicatePath` if two roots yield
/// the same secret.
pub fn fetch_and_merge<S: AsRef<str>>(store: &dyn SecretStore, roots: &[S]) -> Result<Vec<SecretRecord>> {
    let mut batches = Vec::with_capacity(roots.len());
    for root in roots {
        batches.push(fetch(store, root.as_ref())?);
    }

    let merged = merge(batches)?;
    info!(roots = roots.len(), secrets = merged.len(), "fetched secret tree");
    Ok(merged)
}

/// Fetch every secret at or below one root.
///
/// # Errors
///
/// Returns the store's error.
pub fn fetch(store: &dyn SecretStore, root: &str) -> Result<Vec<SecretRecord>> {
    let paths = store.list(root)?;
    debug!(root, leaves = paths.len(), "listed subtree");

    paths.iter().map(|path| store.read(path)).collect()
}

/// Concatenate batches and sort by path.
///
/// # Errors
///
/// Returns `Error::DuplicatePath` naming the first path seen twice.
pub fn merge(batches: Vec<Vec<SecretRecord>>) -> Result<Vec<SecretRecord>> {
    let mut merged: Vec<SecretRecord> = batches.into_iter().flatten().collect();
    merged.sort_by(|a, b| a.path().cmp(b.path()));

    if let Some(pair) = merged.windows(2).find(|pair| pair[0].path() == pair[1].path()) {
        return Err(Error::DuplicatePath(pair[0].path().to_string()));
    }

    Ok(merged)
}
