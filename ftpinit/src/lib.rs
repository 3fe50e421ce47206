#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # ftpinit
//!
//! A library for bootstrapping a multi-user vsftpd service inside a
//! container.
//!
//! The bootstrap merges two possibly-conflicting configuration sources — an
//! optional YAML file and process environment variables — into one
//! normalized server configuration, then provisions OS accounts for the
//! resolved users with exact, idempotent side effects.
//!
//! ## Core Types
//!
//! - [`config::ConfigExtractor`] and [`config::DetectionResult`]: YAML
//!   detection with fail-open degradation
//! - [`config::ConfigResolver`] and [`config::ServerConfig`]: override
//!   precedence and semantic validation
//! - [`provision::UserProvisioner`]: sequential account creation
//! - [`Logger`] and [`LogLevel`]: threshold-gated logging
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```no_run
//! use std::path::Path;
//! use ftpinit::config::{ConfigExtractor, ConfigResolver, Environment};
//! use ftpinit::provision::{SystemAccounts, UserProvisioner};
//! use ftpinit::Logger;
//!
//! let env = Environment::from_process();
//! let detection = ConfigExtractor::extract(Path::new("/etc/ftp/config.yaml"));
//! let config = ConfigResolver::resolve(&detection, &env).unwrap();
//!
//! let provisioner = UserProvisioner::new(SystemAccounts::new(), Logger::from_env(&env));
//! for user in &config.users {
//!     provisioner.create_user(&user.username, user.password()).unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod provision;

// Re-export key types at crate root for convenience
pub use config::{ConfigExtractor, ConfigResolver, DetectionResult, Environment, ServerConfig};
pub use error::{Error, Result};
pub use logging::{LogLevel, Logger};
pub use provision::{SystemAccounts, UserProvisioner};
