//! OS account provisioning for resolved users.
//!
//! Each resolved user becomes an OS account with a home directory under a
//! fixed root, created by a strictly sequential state machine: validate the
//! request, check for pre-existence, then commit the account, password,
//! ownership, and directory mode in order. A duplicate request is rejected
//! before any mutation, so retrying never corrupts an existing account.
//! Provisioning is deliberately un-parallelized; there is one entry point
//! and it commits one account at a time.

pub mod backend;

pub use backend::{AccountBackend, SystemAccounts};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::logging::Logger;

/// Fixed usage line for the `create_user` invocation.
pub const CREATE_USER_USAGE: &str = "Usage: create_user <username> <password>";

/// Default root under which user home directories are created.
pub const DEFAULT_HOME_ROOT: &str = "/ftp";

/// Creates OS accounts for resolved users.
///
/// # Examples
///
/// ```no_run
/// use ftpinit::provision::{SystemAccounts, UserProvisioner};
/// use ftpinit::Logger;
///
/// let provisioner = UserProvisioner::new(SystemAccounts::new(), Logger::default());
/// provisioner.create_user("alice", "secret").unwrap();
/// ```
pub struct UserProvisioner<B: AccountBackend> {
    backend: B,
    logger: Logger,
    home_root: PathBuf,
}

impl<B: AccountBackend> UserProvisioner<B> {
    /// Creates a provisioner rooted at [`DEFAULT_HOME_ROOT`].
    pub fn new(backend: B, logger: Logger) -> Self {
        Self {
            backend,
            logger,
            home_root: PathBuf::from(DEFAULT_HOME_ROOT),
        }
    }

    /// Overrides the home directory root.
    #[must_use]
    pub fn with_home_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.home_root = root.into();
        self
    }

    /// Returns the home directory for a username.
    #[must_use]
    pub fn home_dir(&self, username: &str) -> PathBuf {
        self.home_root.join(username)
    }

    /// Creates one OS account with its home directory.
    ///
    /// On success the account exists with its password set, and
    /// `<root>/<username>` is owned `<username>:<username>` with mode `755`.
    ///
    /// # Errors
    ///
    /// - [`Error::Usage`] when either argument is empty; nothing is checked
    ///   or mutated.
    /// - [`Error::InvalidUsername`] when the name fails identifier
    ///   validation.
    /// - [`Error::DuplicateUser`] when the account already exists; no
    ///   mutation of any kind has happened.
    /// - [`Error::CommandFailed`] / [`Error::Io`] when a commit step fails.
    pub fn create_user(&self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::Usage {
                usage: CREATE_USER_USAGE.to_string(),
            });
        }

        validate_username(username)?;

        if self.backend.exists(username)? {
            return Err(Error::DuplicateUser {
                name: username.to_string(),
            });
        }

        self.logger.info(&format!("Adding user: {username}"));

        let home = self.home_dir(username);
        fs::create_dir_all(&home)?;
        self.backend.create_account(username, &home)?;
        self.backend.set_password(username, password)?;
        self.backend.set_home_ownership(username, &home)?;
        set_mode_755(&home)?;

        self.logger
            .info(&format!("User {username} created successfully."));

        Ok(())
    }
}

/// Validates a username against the identifier pattern `[a-zA-Z0-9_.-]+`.
///
/// Rejects `:` (passwd field separator), path separators, whitespace,
/// control characters, and anything non-ASCII.
///
/// # Errors
///
/// Returns [`Error::InvalidUsername`] describing the rejection.
pub fn validate_username(username: &str) -> Result<()> {
    let valid = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

    if valid && !username.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidUsername {
            name: username.to_string(),
            reason: "usernames may only contain letters, digits, '_', '.' and '-'".to_string(),
        })
    }
}

fn set_mode_755(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}
