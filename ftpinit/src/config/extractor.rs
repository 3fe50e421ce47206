//! Configuration file detection and extraction.
//!
//! This module turns an optional YAML file into a [`DetectionResult`]: the
//! five scalar server fields as text plus the ordered user list. Extraction
//! is fail-open by policy: a missing file yields an undetected empty result
//! and an unreadable or unparseable file yields a *detected* empty result,
//! but neither is ever an error. The container bootstrap must proceed on a
//! degraded configuration rather than refuse to start.

use std::fs;
use std::path::Path;

use crate::config::schema::ConfigDocument;

/// One user extracted from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserEntry {
    /// Account name, empty when the record omitted it.
    pub username: String,
    /// Password environment variable name, empty when the record omitted it.
    pub password_env: String,
}

/// The normalized outcome of one extraction.
///
/// Constructed once per invocation and immutable afterwards. Scalar fields
/// are text; the resolver owns integer validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionResult {
    /// Whether the configuration file was found at all.
    ///
    /// Distinguishes "file absent" from "file present but empty or invalid";
    /// every other field is identical in those two cases.
    pub detected: bool,

    /// Listen address, or empty.
    pub address: String,

    /// Passive range lower bound as text, or empty.
    pub min_port: String,

    /// Passive range upper bound as text, or empty.
    pub max_port: String,

    /// TLS certificate path, or empty.
    pub tls_cert: String,

    /// TLS key path, or empty.
    pub tls_key: String,

    /// Users in document order.
    pub users: Vec<UserEntry>,
}

impl DetectionResult {
    /// An empty result for a missing configuration file.
    #[must_use]
    pub fn undetected() -> Self {
        Self::default()
    }

    /// An empty result for a present but empty or unparseable file.
    #[must_use]
    pub fn detected_empty() -> Self {
        Self {
            detected: true,
            ..Self::default()
        }
    }

    fn from_document(doc: ConfigDocument) -> Self {
        let mut result = Self::detected_empty();

        if let Some(server) = doc.server {
            result.address = server.address.unwrap_or_default().into_string();
            result.min_port = server.min_port.unwrap_or_default().into_string();
            result.max_port = server.max_port.unwrap_or_default().into_string();
            result.tls_cert = server.tls_cert.unwrap_or_default().into_string();
            result.tls_key = server.tls_key.unwrap_or_default().into_string();
        }

        if let Some(users) = doc.users {
            result.users = users
                .into_iter()
                .map(|record| UserEntry {
                    username: record.username.unwrap_or_default().into_string(),
                    password_env: record.password_env.unwrap_or_default().into_string(),
                })
                .collect();
        }

        result
    }
}

/// Extracts configuration from an optional YAML file.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use ftpinit::config::ConfigExtractor;
///
/// let result = ConfigExtractor::extract(Path::new("/etc/ftp/config.yaml"));
/// if result.detected {
///     println!("found {} users", result.users.len());
/// }
/// ```
pub struct ConfigExtractor;

impl ConfigExtractor {
    /// Reads and extracts the file at `path`.
    ///
    /// Never fails: missing files are undetected, unreadable or invalid
    /// files degrade to a detected-but-empty result.
    #[must_use]
    pub fn extract(path: &Path) -> DetectionResult {
        if !path.exists() {
            return DetectionResult::undetected();
        }

        let Ok(contents) = fs::read_to_string(path) else {
            return DetectionResult::detected_empty();
        };

        // An empty file parses as YAML null, hence the Option indirection.
        match serde_yaml::from_str::<Option<ConfigDocument>>(&contents) {
            Ok(Some(doc)) => DetectionResult::from_document(doc),
            Ok(None) => DetectionResult::detected_empty(),
            Err(_) => DetectionResult::detected_empty(),
        }
    }
}
