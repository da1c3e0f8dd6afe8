//! Check command - report the current version of the watched tree.

use std::io;

use tracing::debug;

use crate::cli::request::{self, CheckRequest};
use crate::core::resource::Resource;
use crate::core::store;
use crate::error::Result;

/// Read a check request from stdin and print the list of new versions.
///
/// The list is empty when the tree matches the previous version.
pub fn execute() -> Result<()> {
    let request: CheckRequest = request::read(io::stdin().lock())?;
    request.source.validate()?;

    let store = store::connect(&request.source)?;
    let resource = Resource::new(store.as_ref(), &request.source)?;

    let versions: Vec<_> = resource
        .check(request.version.as_ref())?
        .into_iter()
        .collect();
    debug!(new_versions = versions.len(), "check complete");

    request::write(io::stdout().lock(), &versions)
}
