//! Command to provision one FTP user account.

use crate::error::CliError;
use clap::Args;
use ftpinit::config::Environment;
use ftpinit::provision::{SystemAccounts, UserProvisioner};
use ftpinit::Logger;

/// Create an FTP user account with its home directory.
///
/// On success the account exists with `/ftp/<username>` owned by the user
/// and mode 755. Fails (without mutation) on empty arguments, an invalid
/// username, or an already-existing account.
#[derive(Args)]
pub struct CreateUserCommand {
    /// Account name
    #[arg(value_name = "USERNAME", default_value = "")]
    pub username: String,

    /// Account password
    #[arg(value_name = "PASSWORD", default_value = "")]
    pub password: String,
}

impl CreateUserCommand {
    pub fn execute(self) -> Result<(), CliError> {
        let env = Environment::from_process();
        let provisioner = UserProvisioner::new(SystemAccounts::new(), Logger::from_env(&env));
        provisioner.create_user(&self.username, &self.password)?;
        Ok(())
    }
}
