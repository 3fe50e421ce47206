//! Error types for the ftpinit library.
//!
//! This module provides the error hierarchy for configuration resolution and
//! user provisioning, using `thiserror` for ergonomic error handling.
//!
//! Missing or malformed YAML is deliberately *not* represented here: the
//! extractor degrades those cases to an empty configuration so the container
//! bootstrap always proceeds.

use thiserror::Error;

/// Result type alias for operations that may fail with an ftpinit error.
///
/// # Examples
///
/// ```
/// use ftpinit::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(2121)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the ftpinit library.
///
/// Every variant is fatal to the invocation that produced it; nothing is
/// retried automatically.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or empty.
    ///
    /// The display string is the fixed usage line for the command, printed
    /// verbatim by the CLI.
    #[error("{usage}")]
    Usage {
        /// The fixed usage message for the failed invocation.
        usage: String,
    },

    /// A username failed identifier validation.
    #[error("Invalid username: '{name}': {reason}")]
    InvalidUsername {
        /// The rejected username.
        name: String,
        /// Why the username was rejected.
        reason: String,
    },

    /// An account with this name already exists.
    ///
    /// Signaled before any mutation, so a duplicate creation attempt leaves
    /// the first account's files untouched.
    #[error("User '{name}' already exists")]
    DuplicateUser {
        /// The username that is already taken.
        name: String,
    },

    /// A resolved configuration value is semantically invalid.
    #[error("configuration error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A system command invoked by the account backend failed.
    #[error("{program} failed: {detail}")]
    CommandFailed {
        /// The program that failed.
        program: String,
        /// Exit status or captured diagnostics.
        detail: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
