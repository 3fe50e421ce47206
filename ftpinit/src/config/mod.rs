//! Configuration system for ftpinit.
//!
//! This module resolves the server configuration from two possibly
//! conflicting sources: an optional YAML file and the process environment.
//!
//! # Resolution Pipeline
//!
//! 1. [`ConfigExtractor`] reads the YAML file (when present) into a
//!    [`DetectionResult`] of textual fields. Missing and malformed files
//!    degrade to empty results instead of failing.
//! 2. [`ConfigResolver`] merges the detection result with an
//!    [`Environment`] snapshot under a fixed precedence (environment
//!    override, then YAML, then defaults) and validates the final values.
//!
//! # Operating Modes
//!
//! The precedence yields three observable modes:
//!
//! - **config-only**: no override variables set, YAML values used verbatim;
//! - **env-only**: no config file, every field from the environment with
//!   defaults for the rest;
//! - **env-overrides**: both present, the environment wins per field.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use ftpinit::config::{ConfigExtractor, ConfigResolver, Environment};
//!
//! let detection = ConfigExtractor::extract(Path::new("/etc/ftp/config.yaml"));
//! let env = Environment::from_process();
//! let config = ConfigResolver::resolve(&detection, &env).unwrap();
//!
//! println!("passive range: {}-{}", config.min_port, config.max_port);
//! ```

pub mod environment;
pub mod extractor;
pub mod resolver;
pub mod schema;

// Re-export key types at module root
pub use environment::Environment;
pub use extractor::{ConfigExtractor, DetectionResult, UserEntry};
pub use resolver::{
    ConfigResolver, ResolvedUser, ServerConfig, TlsConfig, DEFAULT_ADDRESS, DEFAULT_MAX_PORT,
    DEFAULT_MIN_PORT,
};
pub use schema::{ConfigDocument, Scalar, ServerSection, UserRecord};
