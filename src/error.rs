//! Error types for vaultsync operations.
//!
//! Each concern gets its own enum; [`Error`] wraps them so callers can use `?`
//! throughout and the binary can print a single message.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    KeyMap(#[from] KeyMapError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Two roots produced a secret at the same path.
    #[error("secret '{0}' was found under more than one root path")]
    DuplicatePath(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A required configuration field is absent or malformed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing '{field}' field")]
    MissingField { field: &'static str },

    #[error("invalid '{field}' field: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// A `keys` entry of a secret map could not be resolved.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyMapError {
    #[error("only one key/value pair can be specified in a rename, got: {0}")]
    MultiKeyRename(String),

    #[error("the secret_map keys field can contain strings and single key/value pairs, not {0}")]
    InvalidKeySpec(String),
}

/// Aggregated key-map defects for one secret.
///
/// Every list is sorted and deduplicated so the rendered message is stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.render())]
pub struct ValidationError {
    /// Identity of the secret being copied (its source path).
    pub secret: String,
    pub duplicate_destinations: Vec<String>,
    pub missing_keys: Vec<String>,
    pub circular_keys: Vec<String>,
}

impl ValidationError {
    /// Whether no defect was recorded.
    pub fn is_empty(&self) -> bool {
        self.duplicate_destinations.is_empty()
            && self.missing_keys.is_empty()
            && self.circular_keys.is_empty()
    }

    fn render(&self) -> String {
        let sections = [
            ("Reused destination keys when copying", &self.duplicate_destinations),
            ("Specified keys not found in input for", &self.missing_keys),
            ("Circular key renames in", &self.circular_keys),
        ];

        sections
            .iter()
            .filter(|(_, keys)| !keys.is_empty())
            .map(|(label, keys)| format!("{} secret `{}': {}", label, self.secret, keys.join(",")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Failures from the secret store collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading source file '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
