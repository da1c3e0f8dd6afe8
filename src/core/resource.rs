//! The resource operations.
//!
//! `check` reports the current tree version, `export` (the pipeline's `in`)
//! writes the tree to a directory, and `import` (the pipeline's `out`) copies
//! secret files into the store according to secret maps.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::config::{OutParams, SecretMap, Source};
use crate::core::domain::Version;
use crate::core::files;
use crate::core::keymap::KeyMap;
use crate::core::merge;
use crate::core::store::{self, SecretStore};
use crate::core::transform;
use crate::core::tree;
use crate::core::types::SecretPath;
use crate::core::walk;
use crate::error::Result;

/// The primary interface for resource operations.
///
/// Borrows an already-authenticated store and carries the validated source
/// settings every operation needs.
pub struct Resource<'s> {
    store: &'s dyn SecretStore,
    url: String,
    roots: Vec<SecretPath>,
}

impl std::fmt::Debug for Resource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("url", &self.url)
            .field("roots", &self.roots)
            .finish()
    }
}

impl<'s> Resource<'s> {
    /// Bind a store to a source configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the source is incomplete.
    pub fn new(store: &'s dyn SecretStore, source: &Source) -> Result<Self> {
        source.validate()?;

        Ok(Self {
            store,
            url: source.url.clone(),
            roots: source.root_paths(),
        })
    }

    /// Fingerprint of the tree under the configured roots.
    ///
    /// # Errors
    ///
    /// Returns the store's error if any root cannot be fetched.
    pub fn version(&self) -> Result<Version> {
        let secrets = tree::fetch_and_merge(self.store, &self.roots)?;
        let version = Version::compute(&secrets, &self.url)?;
        info!(version = %version, "computed version");
        Ok(version)
    }

    /// Compare the current version with the previous one.
    ///
    /// # Returns
    ///
    /// `None` when nothing changed, otherwise the new version.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the tree cannot be fetched.
    pub fn check(&self, previous: Option<&Version>) -> Result<Option<Version>> {
        let current = self.version()?;

        match previous {
            Some(previous) if previous.equal(&current) => {
                info!("secret tree unchanged");
                Ok(None)
            }
            _ => Ok(Some(current)),
        }
    }

    /// Write every secret under the roots to `out_dir`, one JSON file per
    /// secret at its logical path.
    ///
    /// # Returns
    ///
    /// The files written, in path order.
    ///
    /// # Errors
    ///
    /// Returns the store's error, or `StoreError::Write` if a file cannot be
    /// written. Files written before the failure are left in place.
    pub fn export(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let secrets = tree::fetch_and_merge(self.store, &self.roots)?;

        let mut written = Vec::with_capacity(secrets.len());
        for secret in &secrets {
            let file = out_dir.join(secret.path());
            files::write_secret(&file, secret)?;
            written.push(file);
        }

        info!(out = %out_dir.display(), secrets = written.len(), "exported secrets");
        Ok(written)
    }

    /// Copy secret files from `in_dir` into the store, then report the new
    /// version of the watched tree.
    ///
    /// Secret maps are processed in order; the first failure stops the import
    /// with earlier maps already written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for bad params, `KeyMapError` or
    /// `ValidationError` for a bad key list, or the store's error.
    pub fn import(&self, in_dir: &Path, params: &OutParams) -> Result<Version> {
        params.validate()?;
        let root_dir = in_dir.join(store::normalize(&params.path));

        let secret_maps = if params.secret_maps.is_empty() {
            walk::relative_files(&root_dir)?
                .into_iter()
                .map(SecretMap::whole)
                .collect()
        } else {
            params.secret_maps.clone()
        };

        for secret_map in &secret_maps {
            let dest = self.transfer(&root_dir, &params.prefix, secret_map)?;
            info!(source = %secret_map.source, dest = %dest, "imported secret");
        }

        self.version()
    }

    /// Read, validate, transform, merge and write one secret map.
    fn transfer(&self, root_dir: &Path, prefix: &str, secret_map: &SecretMap) -> Result<SecretPath> {
        secret_map.validate()?;

        let source = store::normalize(&secret_map.source);
        let secret = files::read_secret(&root_dir.join(&source), &source)?;

        let key_map = KeyMap::resolve(&secret_map.keys)?;
        transform::validate(&secret, &key_map)?;
        let transformed = transform::apply(&secret, &key_map);

        let dest = store::join(prefix, secret_map.dest_or_source());
        let merged = merge::merge_with_existing(self.store, &dest, transformed);
        self.store.write(&dest, &merged)?;

        debug!(dest = %dest, fields = merged.len(), "wrote secret");
        Ok(dest)
    }
}
