pub mod commands;

pub use commands::{default_pipeline_path, CliArgs, PIPELINE_FILE_NAME};
