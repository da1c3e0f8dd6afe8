//! Out command - import secret files from the step's input directory.

use std::io;
use std::path::Path;

use crate::cli::output;
use crate::cli::request::{self, OutRequest, StepResponse};
use crate::core::resource::Resource;
use crate::core::store;
use crate::error::Result;

/// Copy secrets from `dir` into the store and print the resulting version.
pub fn execute(dir: &Path) -> Result<()> {
    let request: OutRequest = request::read(io::stdin().lock())?;
    request.source.validate()?;
    request.params.validate()?;

    let store = store::connect(&request.source)?;
    let resource = Resource::new(store.as_ref(), &request.source)?;
    let version = resource.import(dir, &request.params)?;

    output::success(&format!("imported secrets from {}", dir.display()));

    let response = StepResponse {
        version: Some(version),
        metadata: Vec::new(),
    };
    request::write(io::stdout().lock(), &response)
}
