//! Resource configuration.
//!
//! The pipeline hands the resource a `source` block (where the store is and
//! which subtrees to watch) and, for `out`, a `params` block describing what
//! to copy. Both arrive as JSON and are validated before any store access.

use serde::Deserialize;
use tracing::debug;

use crate::core::domain::KeySpec;
use crate::core::store;
use crate::core::types::SecretPath;
use crate::error::{ConfigError, Result};

/// Store location, credentials and watched paths.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Source {
    /// Store URL; also reported as the version origin
    pub url: String,
    pub token: Option<String>,
    pub role_id: Option<String>,
    pub secret_id: Option<String>,
    pub ca_cert: Option<String>,
    pub namespace: Option<String>,
    /// Root paths whose subtrees make up the version
    pub paths: Vec<String>,
}

/// How to authenticate against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Token(String),
    AppRole { role_id: String, secret_id: String },
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Source {
    /// Validate required fields.
    ///
    /// Checks:
    /// - `url` is set
    /// - `secret_id` accompanies `role_id`, otherwise `token` is set
    /// - `paths` is non-empty and its first entry is not blank
    /// - no path has a `.` or `..` segment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming the first absent field, or
    /// `ConfigError::InvalidValue` for a relative path segment.
    pub fn validate(&self) -> Result<()> {
        debug!("validating source");

        if self.url.is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }

        self.credentials()?;

        match self.paths.first() {
            Some(first) if !first.is_empty() => {}
            _ => return Err(ConfigError::MissingField { field: "paths" }.into()),
        }
        for path in &self.paths {
            store::ensure_contained("paths", path)?;
        }
        Ok(())
    }

    /// Resolve credentials: AppRole when `role_id` is set, else token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` for `secret_id` or `token`.
    pub fn credentials(&self) -> Result<Credentials> {
        if let Some(role_id) = present(&self.role_id) {
            let secret_id =
                present(&self.secret_id).ok_or(ConfigError::MissingField { field: "secret_id" })?;
            return Ok(Credentials::AppRole {
                role_id: role_id.to_string(),
                secret_id: secret_id.to_string(),
            });
        }

        let token = present(&self.token).ok_or(ConfigError::MissingField { field: "token" })?;
        Ok(Credentials::Token(token.to_string()))
    }

    /// Root paths, normalized.
    pub fn root_paths(&self) -> Vec<SecretPath> {
        self.paths.iter().map(|p| store::normalize(p)).collect()
    }
}

/// Parameters of an `out` (import) step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutParams {
    /// Directory under the input root holding secret files
    pub path: String,
    /// Store path prefix for every destination
    pub prefix: String,
    /// Transfer directives; empty means "every file as is"
    pub secret_maps: Vec<SecretMap>,
}

impl OutParams {
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if `path` is empty, or
    /// `ConfigError::InvalidValue` if `path` or `prefix` has a `.` or `..`
    /// segment.
    pub fn validate(&self) -> Result<()> {
        if self.path.is_empty() {
            return Err(ConfigError::MissingField { field: "path" }.into());
        }
        store::ensure_contained("path", &self.path)?;
        store::ensure_contained("prefix", &self.prefix)
    }
}

/// Transfer directive for one secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SecretMap {
    /// File path under the input root
    pub source: String,
    /// Store path under the prefix; defaults to `source`
    pub dest: String,
    /// Fields to copy; empty copies every field unchanged
    pub keys: Vec<KeySpec>,
}

impl SecretMap {
    /// Directive copying `source` unchanged to the same path.
    pub fn whole(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if `source` is empty, or
    /// `ConfigError::InvalidValue` if `source` or `dest` would leave its root.
    pub fn validate(&self) -> Result<()> {
        if self.source.trim_matches('/').is_empty() {
            return Err(ConfigError::MissingField { field: "source" }.into());
        }
        store::ensure_contained("source", &self.source)?;
        store::ensure_contained("dest", &self.dest)
    }

    /// Destination path, falling back to the source.
    pub fn dest_or_source(&self) -> &str {
        if self.dest.is_empty() {
            &self.source
        } else {
            &self.dest
        }
    }
}
