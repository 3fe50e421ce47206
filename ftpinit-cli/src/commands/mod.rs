//! CLI command implementations.
//!
//! One module per subcommand:
//! - `parse_yaml`: extract a YAML config file into shell variables
//! - `create_user`: provision one FTP user account
//! - `log`: write a leveled log line
//! - `resolve`: print the fully resolved server configuration
//! - `validate`: semantically validate a configuration file

pub mod create_user;
pub mod log;
pub mod parse_yaml;
pub mod resolve;
pub mod validate;

pub use create_user::CreateUserCommand;
pub use log::LogCommand;
pub use parse_yaml::ParseYamlCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
