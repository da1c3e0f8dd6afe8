//! JSON payloads exchanged with the pipeline.
//!
//! Each command reads one request object from stdin and writes one response
//! to stdout.

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::config::{OutParams, Source};
use crate::core::domain::Version;
use crate::error::Result;

/// Input of `check`.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub source: Source,
    #[serde(default)]
    pub version: Option<Version>,
}

/// Input of `in`.
#[derive(Debug, Deserialize)]
pub struct InRequest {
    pub source: Source,
    #[serde(default)]
    pub version: Option<Version>,
}

/// Input of `out`.
#[derive(Debug, Deserialize)]
pub struct OutRequest {
    pub source: Source,
    #[serde(default)]
    pub params: OutParams,
}

/// One name/value pair shown alongside a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataField {
    pub name: String,
    pub value: String,
}

impl MetadataField {
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// Output of `in` and `out`.
#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub version: Option<Version>,
    pub metadata: Vec<MetadataField>,
}

/// Decode one request from `reader`.
///
/// # Errors
///
/// Returns `Error::Serialization` if the payload is not the expected JSON.
pub fn read<T: DeserializeOwned>(reader: impl Read) -> Result<T> {
    Ok(serde_json::from_reader(reader)?)
}

/// Encode `response` as one line of JSON.
///
/// # Errors
///
/// Returns `Error::Serialization` or `Error::Io` if writing fails.
pub fn write<T: Serialize>(mut writer: impl Write, response: &T) -> Result<()> {
    serde_json::to_writer(&mut writer, response)?;
    writeln!(writer)?;
    Ok(())
}
