//! Command to print the fully resolved server configuration.

use crate::error::CliError;
use clap::Args;
use ftpinit::config::{ConfigExtractor, ConfigResolver, DetectionResult, Environment};
use ftpinit::output::shell;
use std::path::PathBuf;

/// Print the fully resolved server configuration as shell variables.
///
/// Runs the extractor and the override resolver against the process
/// environment and renders the result under `RESOLVED_*` names. Passwords
/// are resolved for user filtering but never printed; the entrypoint reads
/// the secrets from their `*_PASS` variables itself.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to the YAML configuration file
    #[arg(long, value_name = "CONFIG_PATH")]
    pub config: Option<PathBuf>,
}

impl ResolveCommand {
    pub fn execute(self) -> Result<(), CliError> {
        let env = Environment::from_process();
        let detection = match &self.config {
            Some(path) => ConfigExtractor::extract(path),
            None => DetectionResult::undetected(),
        };

        let config = ConfigResolver::resolve(&detection, &env)?;
        print!("{}", shell::render_resolved(&config));
        Ok(())
    }
}
