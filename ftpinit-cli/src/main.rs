//! Main entry point for the ftpinit CLI.
//!
//! This binary backs the container entrypoint scripts with a handful of
//! subcommands:
//! - `parse_yaml`: extract a YAML config file into shell variables
//! - `create_user`: provision one FTP user account
//! - `log`: write a leveled log line
//! - `resolve`: print the fully resolved server configuration
//! - `validate`: semantically validate a config file

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Command::ParseYaml(cmd) => cmd.execute(),
        cli::Command::CreateUser(cmd) => cmd.execute(),
        cli::Command::Log(cmd) => cmd.execute(),
        cli::Command::Resolve(cmd) => cmd.execute(),
        cli::Command::Validate(cmd) => cmd.execute(),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
