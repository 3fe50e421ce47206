//! System account backend.
//!
//! The provisioner's side effects on the account database go through the
//! [`AccountBackend`] trait so the state machine can be tested without root.
//! The production implementation shells out to the Alpine user-management
//! tools available in the container image.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Operations against the OS account database.
#[cfg_attr(test, mockall::automock)]
pub trait AccountBackend {
    /// Returns whether an account with this name already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself cannot be performed.
    fn exists(&self, username: &str) -> Result<bool>;

    /// Creates the account bound to `home` without touching the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if account creation fails.
    fn create_account(&self, username: &str, home: &Path) -> Result<()>;

    /// Sets the account password.
    ///
    /// # Errors
    ///
    /// Returns an error if the password cannot be set.
    fn set_password(&self, username: &str, password: &str) -> Result<()>;

    /// Sets `home` ownership to `<username>:<username>`.
    ///
    /// # Errors
    ///
    /// Returns an error if ownership cannot be changed.
    fn set_home_ownership(&self, username: &str, home: &Path) -> Result<()>;
}

/// Backend shelling out to `id`, `adduser`, `chpasswd`, and `chown`.
#[derive(Debug, Default)]
pub struct SystemAccounts;

impl SystemAccounts {
    /// Creates the system backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn run(mut command: Command, program: &str) -> Result<()> {
        let output = command
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::CommandFailed {
                program: program.to_string(),
                detail: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::CommandFailed {
                program: program.to_string(),
                detail: format!("{} ({})", stderr.trim(), output.status),
            })
        }
    }
}

impl AccountBackend for SystemAccounts {
    fn exists(&self, username: &str) -> Result<bool> {
        let status = Command::new("id")
            .args(["-u", username])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Error::CommandFailed {
                program: "id".to_string(),
                detail: e.to_string(),
            })?;

        Ok(status.success())
    }

    fn create_account(&self, username: &str, home: &Path) -> Result<()> {
        // -H: the provisioner creates the home directory itself, with the
        // mode and ownership it guarantees.
        let mut command = Command::new("adduser");
        command
            .args(["-D", "-H", "-h"])
            .arg(home)
            .arg(username);
        Self::run(command, "adduser")
    }

    fn set_password(&self, username: &str, password: &str) -> Result<()> {
        let mut child = Command::new("chpasswd")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::CommandFailed {
                program: "chpasswd".to_string(),
                detail: e.to_string(),
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            writeln!(stdin, "{username}:{password}")?;
        }

        let output = child.wait_with_output().map_err(|e| Error::CommandFailed {
            program: "chpasswd".to_string(),
            detail: e.to_string(),
        })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::CommandFailed {
                program: "chpasswd".to_string(),
                detail: format!("{} ({})", stderr.trim(), output.status),
            })
        }
    }

    fn set_home_ownership(&self, username: &str, home: &Path) -> Result<()> {
        let mut command = Command::new("chown");
        command.arg(format!("{username}:{username}")).arg(home);
        Self::run(command, "chown")
    }
}
