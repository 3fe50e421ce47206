//! Command to write a leveled log line.

use crate::error::CliError;
use clap::Args;
use ftpinit::config::Environment;
use ftpinit::logging::LOG_USAGE;
use ftpinit::{Error, LogLevel, Logger};

/// Write a leveled log line to stdout.
///
/// The threshold comes from `LOG_LEVEL` (default `INFO`). Messages below
/// the threshold and unrecognized level names produce no output and still
/// exit 0; only a bare `log` with no arguments is an error.
#[derive(Args)]
pub struct LogCommand {
    /// Severity name (DEBUG, INFO, WARN, ERROR)
    #[arg(value_name = "LEVEL")]
    pub level: Option<String>,

    /// Message text; multiple arguments are joined with spaces
    #[arg(value_name = "MESSAGE", trailing_var_arg = true)]
    pub message: Vec<String>,
}

impl LogCommand {
    pub fn execute(self) -> Result<(), CliError> {
        let Some(level_name) = self.level else {
            return Err(CliError::Library(Error::Usage {
                usage: LOG_USAGE.to_string(),
            }));
        };

        let env = Environment::from_process();
        let logger = Logger::from_env(&env);

        // Unrecognized level names are "do not emit", not errors.
        if let Ok(level) = LogLevel::parse(&level_name) {
            logger.log(level, &self.message.join(" "));
        }

        Ok(())
    }
}
