//! Vaultsync - keep a secret store and a pipeline workspace in sync.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface (check, in, out)
//! │   ├── check         # Report the current tree version
//! │   ├── get           # Export the tree into a directory
//! │   ├── put           # Import secret files into the store
//! │   └── request       # JSON request/response payloads
//! └── core/             # Core library components
//!     ├── config        # Source and params validation
//!     ├── domain/       # SecretRecord, KeySpec, Version
//!     ├── keymap        # Key list resolution
//!     ├── transform     # Filter, rename and validate fields
//!     ├── tree          # Recursive fetch and merge
//!     ├── merge         # Non-destructive destination merge
//!     ├── store/        # Store trait and backends
//!     │   ├── memory    # In-memory store
//!     │   └── fs        # Directory-backed store
//!     ├── walk          # Relative file enumeration
//!     ├── files         # Secret JSON files
//!     └── resource      # check / export / import
//! ```
//!
//! # Features
//!
//! - Content fingerprint stable across enumeration and insertion order
//! - Key filtering and renaming with aggregated validation errors
//! - Additive writes that never drop fields already stored at a destination
//! - Pluggable store backends

pub mod cli;
pub mod core;
pub mod error;
