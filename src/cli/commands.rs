use clap::Parser;
use std::path::PathBuf;

/// Default artifact filename, resolved against the executable's directory
/// when no path is given on the command line.
pub const PIPELINE_FILE_NAME: &str = "xg_model.bin";

#[derive(Parser, Debug)]
#[command(
    name = "xg-extract",
    about = "Extract trained xG model parameters as TypeScript constants",
    version,
    long_about = "Reads the serialized scaler + logistic-regression pipeline produced by the \
                  training workflow and prints its trained parameters as TypeScript constants \
                  ready to paste into src/utils/xgModel.ts.\n\n\
                  Examples:\n  \
                  xg-extract\n  \
                  xg-extract /path/to/xg_model.bin\n  \
                  xg-extract --json"
)]
pub struct CliArgs {
    #[arg(
        value_name = "PIPELINE",
        help = "Path to the pipeline artifact (defaults to xg_model.bin next to the executable)"
    )]
    pub pipeline: Option<PathBuf>,

    #[arg(long, help = "Also write xg_model_params.json next to the input artifact")]
    pub json: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// Resolves the artifact path: an explicit argument wins, otherwise the
    /// historical default of `xg_model.bin` in the executable's directory.
    pub fn pipeline_path(&self) -> PathBuf {
        match &self.pipeline {
            Some(path) => path.clone(),
            None => default_pipeline_path(),
        }
    }
}

/// `xg_model.bin` beside the running executable, falling back to the bare
/// filename in the current directory when the executable path cannot be
/// resolved.
pub fn default_pipeline_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(PIPELINE_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(PIPELINE_FILE_NAME))
}
