use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading the artifact and emitting
/// output.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input artifact is absent. The historical contract for this case is a
    /// clear hint plus exit status 1.
    #[error("pipeline artifact not found: {}. Train the model first (see the training notebook)", .0.display())]
    MissingArtifact(PathBuf),

    /// File exists but does not decode into a (Scaler, Classifier) pair.
    #[error("failed to decode pipeline artifact {}: {}", .path.display(), .source)]
    MalformedArtifact {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// Decoded fine, but the classifier carries no coefficient row or no
    /// intercept entry.
    #[error("classifier has no coefficient row or intercept")]
    EmptyClassifier,

    #[error("failed to encode pipeline artifact: {0}")]
    EncodeArtifact(#[source] bincode::Error),

    #[error("failed to read {}: {}", .path.display(), .source)]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {}", .path.display(), .source)]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize parameters to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    /// Process exit status for this failure. A missing input keeps the
    /// long-standing status 1; every other failure maps to 2 instead of
    /// surfacing as a panic.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExtractError::MissingArtifact(_) => 1,
            _ => 2,
        }
    }
}
