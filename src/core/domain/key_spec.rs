//! Key specification type.
//!
//! One entry of a secret map's `keys` list. Accepted JSON shapes:
//!
//! ```text
//! "ping"                 -> keep `ping` as is
//! {"ying": "yingling"}   -> copy `ying` as `yingling`
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::core::types::FieldName;
use crate::error::KeyMapError;

/// A user-supplied key specification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum KeySpec {
    /// Keep the field under its own name.
    Identity(FieldName),
    /// Rename pairs as written by the user. Exactly one pair is valid; the
    /// resolver reports anything else.
    Rename(BTreeMap<FieldName, FieldName>),
}

impl KeySpec {
    /// Shorthand for a single-pair rename.
    pub fn rename(from: impl Into<FieldName>, to: impl Into<FieldName>) -> Self {
        Self::Rename(BTreeMap::from([(from.into(), to.into())]))
    }
}

impl From<&str> for KeySpec {
    fn from(name: &str) -> Self {
        Self::Identity(name.to_string())
    }
}

impl TryFrom<Value> for KeySpec {
    type Error = KeyMapError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(name) => Ok(Self::Identity(name)),
            Value::Object(pairs) => {
                let mut renames = BTreeMap::new();
                for (from, to) in pairs {
                    match to {
                        Value::String(to) => {
                            renames.insert(from, to);
                        }
                        other => {
                            return Err(KeyMapError::InvalidKeySpec(format!(
                                "a rename of `{}' to {}",
                                from,
                                kind(&other)
                            )))
                        }
                    }
                }
                Ok(Self::Rename(renames))
            }
            other => Err(KeyMapError::InvalidKeySpec(kind(&other).to_string())),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl std::fmt::Display for KeySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identity(name) => write!(f, "{}", name),
            Self::Rename(pairs) => {
                let rendered: Vec<String> =
                    pairs.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}
