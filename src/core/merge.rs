//! Destination merging.
//!
//! Keeps fields already stored at a destination that the current transfer
//! does not carry, so writing a secret map never drops unrelated fields.

use tracing::debug;

use crate::core::domain::SecretRecord;
use crate::core::store::SecretStore;

/// Fold fields of the secret stored at `dest_path` into `new_record`.
///
/// Fields present in both keep `new_record`'s value. A failed read (usually
/// nothing stored there yet) leaves `new_record` unchanged.
pub fn merge_with_existing(
    store: &dyn SecretStore,
    dest_path: &str,
    new_record: SecretRecord,
) -> SecretRecord {
    match store.read(dest_path) {
        Ok(existing) => fold(existing, new_record),
        Err(e) => {
            debug!(dest = dest_path, error = %e, "no existing secret at destination");
            new_record
        }
    }
}

/// Copy every field of `existing` that `new_record` lacks.
pub fn fold(existing: SecretRecord, mut new_record: SecretRecord) -> SecretRecord {
    let mut retained = 0;
    for (name, value) in existing.fields() {
        if !new_record.has(name) {
            new_record.set(name.as_str(), value.as_str());
            retained += 1;
        }
    }

    debug!(secret = %new_record, retained, "merged with existing secret");
    new_record
}
