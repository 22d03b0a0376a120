//! The extracted parameter set and its two output renderings.

use crate::error::ExtractError;
use crate::pipeline::Pipeline;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File written next to the input artifact when `--json` is given.
pub const PARAMS_FILE_NAME: &str = "xg_model_params.json";

/// The four trained values the web app needs. Field order here is the field
/// order of the emitted JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub scaler_mean: Vec<f64>,
    pub scaler_scale: Vec<f64>,
    pub lr_coef: Vec<f64>,
    pub lr_intercept: f64,
}

impl ModelParams {
    /// Pulls the four values out of a decoded pipeline: the scaler vectors
    /// as-is, row 0 of the coefficient matrix, and entry 0 of the intercept
    /// vector (a binary model has exactly one of each).
    pub fn from_pipeline(pipeline: &Pipeline) -> Result<Self, ExtractError> {
        let lr_coef = pipeline
            .classifier
            .coef
            .first()
            .ok_or(ExtractError::EmptyClassifier)?
            .clone();
        let lr_intercept = pipeline
            .classifier
            .intercept
            .first()
            .copied()
            .ok_or(ExtractError::EmptyClassifier)?;

        Ok(Self {
            scaler_mean: pipeline.scaler.mean.clone(),
            scaler_scale: pipeline.scaler.scale.clone(),
            lr_coef,
            lr_intercept,
        })
    }

    /// Renders the paste-ready TypeScript block: one banner comment followed
    /// by four `let NAME = VALUE;` lines. The extra spaces around `=` line
    /// the values up and are cosmetic only.
    pub fn render_assignments(&self) -> String {
        let mut out = String::new();
        out.push_str("// ── Paste these into src/utils/xgModel.ts ──\n");
        out.push_str(&format!("let SCALER_MEAN  = {};\n", format_array(&self.scaler_mean)));
        out.push_str(&format!("let SCALER_SCALE = {};\n", format_array(&self.scaler_scale)));
        out.push_str(&format!("let LR_COEF      = {};\n", format_array(&self.lr_coef)));
        out.push_str(&format!("let LR_INTERCEPT  = {};\n", self.lr_intercept));
        out
    }

    /// Writes the pretty-printed JSON document to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), ExtractError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ExtractError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `xg_model_params.json` in the same directory as the input artifact.
pub fn params_path_for(pipeline_path: &Path) -> PathBuf {
    pipeline_path.with_file_name(PARAMS_FILE_NAME)
}

fn format_array(values: &[f64]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
