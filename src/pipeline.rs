//! On-disk layout of the trained pipeline artifact.
//!
//! The training side persists a (scaler, classifier) pair with bincode. This
//! module mirrors that layout closely enough to pull the trained values back
//! out; anything else the training process stores is out of scope.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-feature normalization statistics, one entry per input feature, in
/// feature order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Trained logistic-regression weights. A binary model has exactly one
/// coefficient row and one intercept entry; the matrix/vector shape is kept
/// as the trainer persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

/// The two-stage pipeline as persisted by the training workflow: scaler
/// first, classifier second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub scaler: Scaler,
    pub classifier: Classifier,
}

impl Pipeline {
    /// Reads and decodes the artifact at `path`.
    ///
    /// A missing file is reported as [`ExtractError::MissingArtifact`] so the
    /// caller can keep the historical exit status for that case; any decode
    /// failure is [`ExtractError::MalformedArtifact`].
    pub fn load(path: &Path) -> Result<Self, ExtractError> {
        if !path.exists() {
            return Err(ExtractError::MissingArtifact(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| ExtractError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        bincode::deserialize(&bytes).map_err(|source| ExtractError::MalformedArtifact {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Encodes this pipeline to `path`. The extractor itself never writes
    /// artifacts; this exists for fixture generation and the training-side
    /// tooling.
    pub fn save(&self, path: &Path) -> Result<(), ExtractError> {
        let bytes = bincode::serialize(self).map_err(ExtractError::EncodeArtifact)?;
        fs::write(path, bytes).map_err(|source| ExtractError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_pipeline() -> Pipeline {
        Pipeline {
            scaler: Scaler {
                mean: vec![0.1, 0.2, 0.3],
                scale: vec![1.0, 1.1, 1.2],
            },
            classifier: Classifier {
                coef: vec![vec![0.5, -0.3, 0.2]],
                intercept: vec![-1.4],
            },
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("xg_model.bin");

        let pipeline = sample_pipeline();
        pipeline.save(&path).expect("Failed to save pipeline");

        let loaded = Pipeline::load(&path).expect("Failed to load pipeline");
        assert_eq!(loaded, pipeline);
    }

    #[test]
    fn load_missing_file_is_missing_artifact() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("does_not_exist.bin");

        let err = Pipeline::load(&path).expect_err("load should fail");
        assert!(matches!(err, ExtractError::MissingArtifact(p) if p == path));
    }

    #[test]
    fn load_garbage_is_malformed_artifact() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("xg_model.bin");
        std::fs::write(&path, b"definitely not bincode").expect("Failed to write garbage");

        let err = Pipeline::load(&path).expect_err("load should fail");
        assert!(matches!(err, ExtractError::MalformedArtifact { .. }));
    }
}
