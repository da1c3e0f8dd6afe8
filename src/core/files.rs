//! Secret file encoding.
//!
//! A secret on disk is a JSON object of field name to string value.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::core::constants;
use crate::core::domain::SecretRecord;
use crate::error::{Result, StoreError};

/// Decode the secret stored in `file`, assigning it the logical `path`.
///
/// # Errors
///
/// Returns `StoreError::Read` if the file cannot be read, or
/// `StoreError::Decode` if it is not a JSON object of strings.
pub fn read_secret(file: &Path, path: &str) -> Result<SecretRecord> {
    let raw = fs::read(file).map_err(|source| StoreError::Read {
        path: file.to_path_buf(),
        source,
    })?;
    let fields: BTreeMap<String, String> =
        serde_json::from_slice(&raw).map_err(|source| StoreError::Decode {
            path: file.to_path_buf(),
            source,
        })?;

    debug!(file = %file.display(), fields = fields.len(), "decoded secret file");
    Ok(SecretRecord::new(path, fields))
}

/// Encode `secret` as compact JSON into `file`, creating parent directories.
///
/// # Errors
///
/// Returns `StoreError::Write` if a directory or the file cannot be written.
pub fn write_secret(file: &Path, secret: &SecretRecord) -> Result<()> {
    let raw = serde_json::to_vec(secret.fields())?;
    let write_err = |source| StoreError::Write {
        path: file.to_path_buf(),
        source,
    };

    if let Some(parent) = file.parent() {
        create_dirs(parent).map_err(write_err)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut handle = fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(constants::FILE_MODE)
            .open(file)
            .map_err(write_err)?;
        handle.write_all(&raw).map_err(write_err)?;
        handle.flush().map_err(write_err)?;

        fs::set_permissions(file, fs::Permissions::from_mode(constants::FILE_MODE))
            .map_err(write_err)?;
    }

    #[cfg(not(unix))]
    {
        let mut handle = fs::File::create(file).map_err(write_err)?;
        handle.write_all(&raw).map_err(write_err)?;
    }

    debug!(file = %file.display(), fields = secret.len(), "wrote secret file");
    Ok(())
}

fn create_dirs(dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(constants::DIR_MODE);
    }

    builder.create(dir)
}
