//! Constants used throughout vaultsync.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable holding the log filter (e.g., `vaultsync=debug`).
pub const LOG_ENV: &str = "VAULTSYNC_LOG";

/// URL scheme of the directory-backed store (`file:///srv/secrets`).
pub const FILE_SCHEME: &str = "file://";

/// Permissions for directories created when writing secret files.
pub const DIR_MODE: u32 = 0o775;

/// Permissions for secret files.
pub const FILE_MODE: u32 = 0o644;

