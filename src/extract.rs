//! The one-shot extraction flow: load the artifact, print the paste-ready
//! block, optionally emit the JSON document.

use crate::error::ExtractError;
use crate::params::{self, ModelParams};
use crate::pipeline::Pipeline;
use std::path::Path;
use tracing::debug;

/// Runs a single extraction against the artifact at `pipeline_path`.
///
/// On success the assignment block lands on stdout and, when `emit_json` is
/// set, the JSON document lands next to the input with a confirmation line on
/// stderr. Nothing is written on any failure path.
pub fn run(pipeline_path: &Path, emit_json: bool) -> Result<(), ExtractError> {
    debug!(path = %pipeline_path.display(), emit_json, "extracting pipeline parameters");

    let pipeline = Pipeline::load(pipeline_path)?;
    let params = ModelParams::from_pipeline(&pipeline)?;
    debug!(features = params.lr_coef.len(), "decoded pipeline");

    print!("{}", params.render_assignments());

    if emit_json {
        let json_path = params::params_path_for(pipeline_path);
        params.write_json(&json_path)?;
        eprintln!("Also wrote → {}", json_path.display());
    }

    Ok(())
}
