//! Command to validate a configuration file.

use crate::error::CliError;
use clap::Args;
use ftpinit::config::{ConfigExtractor, ConfigResolver, Environment};
use std::path::PathBuf;

/// Semantically validate a configuration file.
///
/// Applies the same resolution the bootstrap would (without environment
/// overrides) and reports the verdict. Note that per the fail-open policy a
/// syntactically broken file degrades to an empty configuration, which is
/// valid; this command checks semantics, not syntax.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let detection = ConfigExtractor::extract(&self.config_path);

        match ConfigResolver::resolve(&detection, &Environment::empty()) {
            Ok(_) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
