//! Test support utilities for vaultsync integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// `store` backs a `file://` secret store; `work` holds the step's input
/// and output directories. No process-global state is touched, so tests
/// can run in parallel.
pub struct Test {
    /// Root of the directory-backed store
    pub store: TempDir,
    /// Pipeline working directory
    pub work: TempDir,
}

impl Test {
    /// Create a new environment with an empty store.
    pub fn new() -> Self {
        let store = TempDir::new().expect("failed to create temp store");
        let work = TempDir::new().expect("failed to create temp work dir");

        Self { store, work }
    }

    /// Create an environment holding one `secret/handshake` secret with
    /// `knock=knock`, like a fresh dev server.
    pub fn with_handshake() -> Self {
        let t = Self::new();
        t.seed_store("secret/handshake", &[("knock", "knock")]);
        t
    }

    /// `file://` URL of the store.
    pub fn url(&self) -> String {
        format!("file://{}", self.store.path().display())
    }
}
