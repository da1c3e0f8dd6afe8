//! Domain types.

mod key_spec;
mod secret;
mod version;

pub use key_spec::KeySpec;
pub use secret::SecretRecord;
pub use version::Version;
