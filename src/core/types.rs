//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A logical secret location within the store (e.g., `secret/some/place`).
///
/// Always normalized: no leading or trailing slash, no empty segments.
pub type SecretPath = String;

/// A field name inside one secret (e.g., `password`).
pub type FieldName = String;

/// A plaintext field value.
pub type FieldValue = String;
