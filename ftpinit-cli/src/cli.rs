//! CLI structure and command definitions.
//!
//! The subcommand names keep the underscores of the original entrypoint
//! scripts (`parse_yaml`, `create_user`) so existing callers keep working.

use crate::commands::{
    CreateUserCommand, LogCommand, ParseYamlCommand, ResolveCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Container bootstrap helpers for a multi-user vsftpd image.
#[derive(Parser)]
#[command(name = "ftpinit")]
#[command(version, about = "Bootstrap a multi-user vsftpd container", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Extract a YAML config file into shell variables
    #[command(name = "parse_yaml")]
    ParseYaml(ParseYamlCommand),

    /// Create an FTP user account with its home directory
    #[command(name = "create_user")]
    CreateUser(CreateUserCommand),

    /// Write a leveled log line to stdout
    Log(LogCommand),

    /// Print the fully resolved server configuration
    Resolve(ResolveCommand),

    /// Semantically validate a configuration file
    Validate(ValidateCommand),
}
