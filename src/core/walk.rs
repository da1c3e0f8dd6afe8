//! Recursive file enumeration.
//!
//! Shared by the import file scan and the directory-backed store so both
//! produce the same slash-separated, sorted relative paths.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, StoreError};

/// List every regular file under `root`, relative to `root`.
///
/// Paths use `/` as separator on every platform and are returned sorted.
/// A `root` that is itself a file yields an empty list.
///
/// # Errors
///
/// Returns `StoreError::Read` if `root` or any directory below it cannot be read.
pub fn relative_files(root: &Path) -> Result<Vec<String>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| StoreError::Read {
            path: err.path().unwrap_or(root).to_path_buf(),
            source: err.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root) {
            let segments: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            found.push(segments.join("/"));
        }
    }

    found.sort();
    Ok(found)
}
