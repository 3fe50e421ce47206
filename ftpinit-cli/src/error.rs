//! CLI-specific error types with exit codes.
//!
//! Library errors are printed verbatim — the usage lines and the
//! provisioning messages are part of the entrypoint contract — and mapped to
//! distinct process exit codes.

use std::fmt;
use ftpinit::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// Semantic failure (e.g., a validation verdict) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure or usage error
    /// - 2: Invalid username
    /// - 3: Duplicate user
    /// - 4: Invalid arguments
    /// - 5: Configuration error
    /// - 6: I/O or system command failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::Usage { .. } => 1,
                LibError::InvalidUsername { .. } => 2,
                LibError::DuplicateUser { .. } => 3,
                LibError::Validation { .. } => 5,
                LibError::CommandFailed { .. } | LibError::Io(_) => 6,
            },
            CliError::InvalidArguments(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}
