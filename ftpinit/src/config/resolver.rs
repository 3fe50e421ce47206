//! Override resolution and semantic validation.
//!
//! This module merges a [`DetectionResult`] with an [`Environment`] snapshot
//! into the final [`ServerConfig`] under a fixed per-field precedence:
//!
//! 1. the dedicated environment variable, when set and non-empty;
//! 2. the YAML value, when present and non-empty;
//! 3. the built-in default.
//!
//! Only semantically invalid *final* values fail resolution (non-numeric
//! ports, an inverted range, half of a TLS pair, duplicate usernames).
//! Everything upstream already degraded gracefully.

use std::collections::HashSet;
use std::fmt;

use crate::config::environment::Environment;
use crate::config::extractor::DetectionResult;
use crate::error::{Error, Result};

/// Override variable for the listen address.
pub const ADDRESS_VAR: &str = "ADDRESS";
/// Override variable for the passive range lower bound.
pub const MIN_PORT_VAR: &str = "MIN_PORT";
/// Override variable for the passive range upper bound.
pub const MAX_PORT_VAR: &str = "MAX_PORT";
/// Override variable for the TLS certificate path.
pub const TLS_CERT_VAR: &str = "TLS_CERT";
/// Override variable for the TLS key path.
pub const TLS_KEY_VAR: &str = "TLS_KEY";
/// Variable naming users when the configuration file supplies none.
pub const USERS_VAR: &str = "USERS";

/// Default listen address.
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
/// Default passive range lower bound.
pub const DEFAULT_MIN_PORT: u16 = 21000;
/// Default passive range upper bound.
pub const DEFAULT_MAX_PORT: u16 = 21010;

/// TLS certificate and key paths, always configured as a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    /// Path to the certificate file.
    pub cert: String,
    /// Path to the private key file.
    pub key: String,
}

/// A fully resolved user: name, password source, and the secret itself.
///
/// The password is private and redacted from the `Debug` representation; it
/// is handed out only through [`ResolvedUser::password`] at provisioning
/// time and is never rendered or persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedUser {
    /// Account name.
    pub username: String,
    /// Environment variable the password was read from.
    pub password_env: String,
    password: String,
}

impl ResolvedUser {
    /// Creates a resolved user.
    #[must_use]
    pub fn new(username: String, password_env: String, password: String) -> Self {
        Self {
            username,
            password_env,
            password,
        }
    }

    /// Returns the resolved password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for ResolvedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedUser")
            .field("username", &self.username)
            .field("password_env", &self.password_env)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The final, validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address.
    pub address: String,
    /// Passive range lower bound.
    pub min_port: u16,
    /// Passive range upper bound, always `>= min_port`.
    pub max_port: u16,
    /// TLS paths, `None` when TLS is disabled.
    pub tls: Option<TlsConfig>,
    /// Users with resolved passwords, unique by name, in source order.
    pub users: Vec<ResolvedUser>,
}

/// Resolves detection results against an environment snapshot.
///
/// # Examples
///
/// ```
/// use ftpinit::config::{ConfigResolver, DetectionResult, Environment};
///
/// let env = Environment::from_iter([("ADDRESS", "10.0.0.1")]);
/// let config = ConfigResolver::resolve(&DetectionResult::undetected(), &env).unwrap();
/// assert_eq!(config.address, "10.0.0.1");
/// assert_eq!(config.min_port, 21000);
/// ```
pub struct ConfigResolver;

impl ConfigResolver {
    /// Merges `detection` and `env` into a validated [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when a final value is semantically
    /// invalid: a non-numeric or zero port, `min_port > max_port`, a TLS
    /// certificate without a key (or vice versa), or duplicate usernames.
    pub fn resolve(detection: &DetectionResult, env: &Environment) -> Result<ServerConfig> {
        let address = Self::resolve_field(env, ADDRESS_VAR, &detection.address)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let min_port = match Self::resolve_field(env, MIN_PORT_VAR, &detection.min_port) {
            Some(text) => Self::parse_port("min_port", &text)?,
            None => DEFAULT_MIN_PORT,
        };
        let max_port = match Self::resolve_field(env, MAX_PORT_VAR, &detection.max_port) {
            Some(text) => Self::parse_port("max_port", &text)?,
            None => DEFAULT_MAX_PORT,
        };

        if min_port > max_port {
            return Err(Error::Validation {
                field: "max_port".to_string(),
                message: format!("passive range is inverted: {min_port} > {max_port}"),
            });
        }

        let tls = Self::resolve_tls(detection, env)?;
        let users = Self::resolve_users(detection, env)?;

        Ok(ServerConfig {
            address,
            min_port,
            max_port,
            tls,
            users,
        })
    }

    /// Synthesizes the conventional password variable name for a username.
    ///
    /// # Examples
    ///
    /// ```
    /// use ftpinit::config::ConfigResolver;
    ///
    /// assert_eq!(ConfigResolver::password_env_name("alice"), "ALICE_PASS");
    /// ```
    #[must_use]
    pub fn password_env_name(username: &str) -> String {
        format!("{}_PASS", username.to_uppercase())
    }

    /// Applies the field precedence: override variable, then YAML, then none.
    fn resolve_field(env: &Environment, var: &str, yaml_value: &str) -> Option<String> {
        if let Some(value) = env.get_non_empty(var) {
            return Some(value.to_string());
        }
        if !yaml_value.is_empty() {
            return Some(yaml_value.to_string());
        }
        None
    }

    fn parse_port(field: &str, text: &str) -> Result<u16> {
        let port: u16 = text.parse().map_err(|_| Error::Validation {
            field: field.to_string(),
            message: format!("not a valid port number: '{text}'"),
        })?;

        if port == 0 {
            return Err(Error::Validation {
                field: field.to_string(),
                message: "port 0 is not usable as a passive port".to_string(),
            });
        }

        Ok(port)
    }

    fn resolve_tls(detection: &DetectionResult, env: &Environment) -> Result<Option<TlsConfig>> {
        let cert = Self::resolve_field(env, TLS_CERT_VAR, &detection.tls_cert);
        let key = Self::resolve_field(env, TLS_KEY_VAR, &detection.tls_key);

        match (cert, key) {
            (Some(cert), Some(key)) => Ok(Some(TlsConfig { cert, key })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(Error::Validation {
                field: "tls_key".to_string(),
                message: "tls_cert is set but tls_key is not".to_string(),
            }),
            (None, Some(_)) => Err(Error::Validation {
                field: "tls_cert".to_string(),
                message: "tls_key is set but tls_cert is not".to_string(),
            }),
        }
    }

    fn resolve_users(detection: &DetectionResult, env: &Environment) -> Result<Vec<ResolvedUser>> {
        let candidates: Vec<(String, String)> = if detection.users.is_empty() {
            // Env-only mode: usernames listed in USERS, passwords by
            // convention.
            env.get(USERS_VAR)
                .unwrap_or_default()
                .split([' ', '\t', ','])
                .filter(|name| !name.is_empty())
                .map(|name| (name.to_string(), Self::password_env_name(name)))
                .collect()
        } else {
            detection
                .users
                .iter()
                .filter(|entry| !entry.username.is_empty())
                .map(|entry| {
                    let pass_env = if entry.password_env.is_empty() {
                        Self::password_env_name(&entry.username)
                    } else {
                        entry.password_env.clone()
                    };
                    (entry.username.clone(), pass_env)
                })
                .collect()
        };

        let mut seen = HashSet::new();
        let mut users = Vec::new();

        for (username, password_env) in candidates {
            if !seen.insert(username.clone()) {
                return Err(Error::Validation {
                    field: "users".to_string(),
                    message: format!("duplicate username: '{username}'"),
                });
            }

            // A user without a password is never provisioned half-way; it is
            // dropped from the configuration entirely.
            if let Some(password) = env.get_non_empty(&password_env) {
                users.push(ResolvedUser::new(
                    username,
                    password_env,
                    password.to_string(),
                ));
            }
        }

        Ok(users)
    }
}
