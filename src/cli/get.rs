//! In command - export the watched tree into the step's output directory.

use std::io;
use std::path::Path;

use crate::cli::output;
use crate::cli::request::{self, InRequest, MetadataField, StepResponse};
use crate::core::resource::Resource;
use crate::core::store;
use crate::error::Result;

/// Write every watched secret under `dir` and echo the requested version,
/// reporting how many secrets were written as metadata.
pub fn execute(dir: &Path) -> Result<()> {
    let request: InRequest = request::read(io::stdin().lock())?;
    request.source.validate()?;

    let store = store::connect(&request.source)?;
    let resource = Resource::new(store.as_ref(), &request.source)?;
    let written = resource.export(dir)?;

    output::success(&format!(
        "exported {} secrets to {}",
        written.len(),
        dir.display()
    ));

    let response = StepResponse {
        version: request.version,
        metadata: vec![MetadataField::new("secrets", written.len())],
    };
    request::write(io::stdout().lock(), &response)
}
