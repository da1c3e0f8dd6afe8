//! Directory-backed secret store.
//!
//! Each leaf secret is a JSON file whose path below the root directory is
//! the secret's logical path (`<root>/secret/handshake`).

use std::path::PathBuf;

use tracing::debug;

use super::{ensure_contained, join, normalize, SecretStore};
use crate::core::config::Credentials;
use crate::core::domain::SecretRecord;
use crate::core::files;
use crate::core::types::SecretPath;
use crate::core::walk;
use crate::error::{Result, StoreError};

/// Filesystem-based store rooted at a directory.
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File or directory backing a normalized store path. Paths that would
    /// leave the root are rejected.
    fn file_for(&self, path: &str) -> Result<PathBuf> {
        ensure_contained("path", path)?;
        if path.is_empty() {
            Ok(self.root.clone())
        } else {
            Ok(self.root.join(path))
        }
    }
}

impl SecretStore for Directory {
    fn authenticate(&self, credentials: &Credentials) -> Result<()> {
        let method = match credentials {
            Credentials::Token(_) => "token",
            Credentials::AppRole { .. } => "approle",
        };
        debug!(method, root = %self.root.display(), "authenticated against directory store");
        Ok(())
    }

    fn list(&self, path: &str) -> Result<Vec<SecretPath>> {
        let path = normalize(path);
        let target = self.file_for(&path)?;

        if target.is_file() {
            return Ok(vec![path]);
        }
        if !target.is_dir() {
            return Err(StoreError::NotFound(path).into());
        }

        let found: Vec<SecretPath> = walk::relative_files(&target)?
            .into_iter()
            .map(|relative| join(&path, &relative))
            .collect();

        if found.is_empty() {
            return Err(StoreError::NotFound(path).into());
        }
        Ok(found)
    }

    fn read(&self, path: &str) -> Result<SecretRecord> {
        let path = normalize(path);
        let file = self.file_for(&path)?;
        if path.is_empty() || !file.is_file() {
            return Err(StoreError::NotFound(path).into());
        }
        files::read_secret(&file, &path)
    }

    fn write(&self, path: &str, secret: &SecretRecord) -> Result<()> {
        let path = normalize(path);
        files::write_secret(&self.file_for(&path)?, secret)
    }
}
