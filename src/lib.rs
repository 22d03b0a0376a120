//! xg-extract - trained xG pipeline parameter extraction
//!
//! This library reads the serialized two-stage pipeline produced by the xG
//! training workflow (a feature scaler followed by a binary logistic
//! regression) and turns its trained values into constants for the consuming
//! web app.
//!
//! # Core Concepts
//!
//! - **Pipeline**: the persisted (Scaler, Classifier) pair, bincode-encoded
//!   by the training side and opaque to everything here except four fields
//! - **ModelParams**: the four extracted values (scaler mean/scale vectors,
//!   coefficient vector, intercept) that get printed or written to JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use xg_extract::{ModelParams, Pipeline};
//! use std::path::Path;
//!
//! fn print_params(path: &Path) -> Result<(), xg_extract::ExtractError> {
//!     let pipeline = Pipeline::load(path)?;
//!     let params = ModelParams::from_pipeline(&pipeline)?;
//!     print!("{}", params.render_assignments());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod params;
pub mod pipeline;

pub use error::ExtractError;
pub use params::ModelParams;
pub use pipeline::{Classifier, Pipeline, Scaler};

/// Crate version, as reported by `--version` and the startup debug line.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
