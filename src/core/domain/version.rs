//! Version type.
//!
//! Content fingerprint of a merged secret tree, used by the pipeline to detect
//! changes between checks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use super::SecretRecord;
use crate::error::Result;

/// Fingerprint of a secret tree as reported to the pipeline.
///
/// Serializes to exactly two string entries: `secret_sha1` and `url`. An
/// empty object decodes to the default (empty) version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    /// Hex-encoded SHA-1 of the canonical tree serialization
    #[serde(rename = "secret_sha1")]
    pub hash: String,
    /// Store instance that produced the tree
    #[serde(rename = "url")]
    pub origin_url: String,
}

impl Version {
    /// Fingerprint a merged tree.
    ///
    /// The tree is serialized as a JSON object keyed by path, each value an
    /// object of the record's fields. Both levels are `BTreeMap`s, so the bytes
    /// depend only on content, never on enumeration or insertion order. If a
    /// path appears more than once the first record wins.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if the tree cannot be encoded.
    pub fn compute(tree: &[SecretRecord], origin_url: &str) -> Result<Self> {
        let mut canonical = BTreeMap::new();
        for record in tree {
            canonical.entry(record.path()).or_insert_with(|| record.fields());
        }

        let raw = serde_json::to_vec(&canonical)?;
        let hash = format!("{:x}", Sha1::digest(&raw));

        Ok(Self {
            hash,
            origin_url: origin_url.to_string(),
        })
    }

    /// Whether both the hash and the origin match.
    pub fn equal(&self, other: &Version) -> bool {
        self.hash == other.hash && self.origin_url == other.origin_url
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.hash, self.origin_url)
    }
}
