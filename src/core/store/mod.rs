//! Secret store access.
//!
//! Abstracts the key-value secret store so the core can run against a real
//! backend or a test double.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `http.rs`)
//! 3. Wire its URL scheme into [`connect`]
//!
//! ## Example
//!
//! ```ignore
//! struct Remote { /* ... */ }
//!
//! impl SecretStore for Remote {
//!     fn list(&self, path: &str) -> Result<Vec<SecretPath>> {
//!         // Walk the remote tree
//!     }
//!     fn read(&self, path: &str) -> Result<SecretRecord> {
//!         // Fetch one secret
//!     }
//!     fn write(&self, path: &str, secret: &SecretRecord) -> Result<()> {
//!         // Store one secret
//!     }
//! }
//! ```

use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::config::{Credentials, Source};
use crate::core::constants;
use crate::core::domain::SecretRecord;
use crate::core::types::SecretPath;
use crate::error::{ConfigError, Result};

mod fs;
mod memory;

pub use fs::Directory;
pub use memory::Memory;

/// Secret store trait.
///
/// Paths passed in may carry leading or trailing slashes; implementations
/// normalize them with [`normalize`] and always return normalized paths.
pub trait SecretStore {
    /// Authenticate once before any other call.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the credentials.
    fn authenticate(&self, _credentials: &Credentials) -> Result<()> {
        Ok(())
    }

    /// Every leaf secret path at or below `path`, sorted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing exists at or below `path`.
    fn list(&self, path: &str) -> Result<Vec<SecretPath>>;

    /// Read the secret at a leaf path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no secret exists there.
    fn read(&self, path: &str) -> Result<SecretRecord>;

    /// Replace the secret at `path` with `secret`'s fields.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    fn write(&self, path: &str, secret: &SecretRecord) -> Result<()>;
}

/// Normalize a store path: no leading or trailing slash, no empty segments.
pub fn normalize(path: &str) -> SecretPath {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a prefix and a path into one normalized store path.
pub fn join(prefix: &str, path: &str) -> SecretPath {
    normalize(&format!("{}/{}", prefix, path))
}

/// Reject `.` and `..` segments so `path` cannot leave the root it is
/// resolved against.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming `field`.
pub fn ensure_contained(field: &'static str, path: &str) -> Result<()> {
    if path.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("relative segment in '{}'", path),
        }
        .into());
    }
    Ok(())
}

/// Whether `candidate` is `root` itself or lies below it.
pub(crate) fn is_within(root: &str, candidate: &str) -> bool {
    root.is_empty()
        || candidate == root
        || (candidate.starts_with(root) && candidate[root.len()..].starts_with('/'))
}

/// Open the store named by `source.url` and authenticate against it.
///
/// Supported schemes:
/// - `file://<dir>`: a [`Directory`] store rooted at `<dir>`
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unsupported URL, or the
/// store's error if authentication fails.
pub fn connect(source: &Source) -> Result<Box<dyn SecretStore>> {
    let credentials = source.credentials()?;

    let store: Box<dyn SecretStore> = match source.url.strip_prefix(constants::FILE_SCHEME) {
        Some(dir) if !dir.is_empty() => {
            info!(root = dir, "using directory store");
            Box::new(Directory::new(PathBuf::from(dir)))
        }
        _ => {
            return Err(ConfigError::InvalidValue {
                field: "url",
                reason: format!("unsupported store location: {}", source.url),
            }
            .into())
        }
    };

    if source.ca_cert.is_some() || source.namespace.is_some() {
        debug!("ca_cert and namespace do not apply to the directory store");
    }

    store.authenticate(&credentials)?;
    Ok(store)
}
