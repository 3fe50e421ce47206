//! Command to extract a YAML configuration file into shell variables.

use crate::error::CliError;
use clap::Args;
use ftpinit::config::{ConfigExtractor, DetectionResult};
use ftpinit::output::shell;
use std::path::PathBuf;

/// Extract a YAML config file into shell variables.
///
/// Always exits 0: a missing file (or no path at all) reports
/// `CONFIG_FILE_DETECTED=0` and a present but invalid file degrades to an
/// empty variable set. The caller reads the outcome from the variables,
/// never from the exit status.
#[derive(Args)]
pub struct ParseYamlCommand {
    /// Path to the YAML configuration file
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ParseYamlCommand {
    pub fn execute(self) -> Result<(), CliError> {
        let result = match &self.config_path {
            Some(path) => ConfigExtractor::extract(path),
            None => DetectionResult::undetected(),
        };
        print!("{}", shell::render_detection(&result));
        Ok(())
    }
}
