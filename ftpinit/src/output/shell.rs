//! Shell-assignment rendering of configuration results.
//!
//! The container entrypoint consumes configuration as `eval`-able shell
//! assignments. Flags and counts are emitted bare (`CONFIG_FILE_DETECTED=1`,
//! `YAML_USER_COUNT=2`); string values are single-quoted with embedded
//! single quotes escaped as `'\''`. Passwords never pass through this
//! module.

use std::fmt::Write;

use crate::config::extractor::DetectionResult;
use crate::config::resolver::ServerConfig;

/// Single-quotes a value for POSIX shell consumption.
///
/// # Examples
///
/// ```
/// use ftpinit::output::shell;
///
/// assert_eq!(shell::quote("127.0.0.1"), "'127.0.0.1'");
/// assert_eq!(shell::quote("it's"), r"'it'\''s'");
/// ```
#[must_use]
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Renders a detection result as the `YAML_*` variable set.
///
/// # Examples
///
/// ```
/// use ftpinit::config::DetectionResult;
/// use ftpinit::output::shell;
///
/// let rendered = shell::render_detection(&DetectionResult::undetected());
/// assert!(rendered.starts_with("CONFIG_FILE_DETECTED=0\n"));
/// ```
#[must_use]
pub fn render_detection(result: &DetectionResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "CONFIG_FILE_DETECTED={}",
        u8::from(result.detected)
    );
    let _ = writeln!(out, "YAML_ADDRESS={}", quote(&result.address));
    let _ = writeln!(out, "YAML_MIN_PORT={}", quote(&result.min_port));
    let _ = writeln!(out, "YAML_MAX_PORT={}", quote(&result.max_port));
    let _ = writeln!(out, "YAML_TLS_CERT={}", quote(&result.tls_cert));
    let _ = writeln!(out, "YAML_TLS_KEY={}", quote(&result.tls_key));
    let _ = writeln!(out, "YAML_USER_COUNT={}", result.users.len());

    for (i, user) in result.users.iter().enumerate() {
        let _ = writeln!(out, "YAML_USER_{i}_NAME={}", quote(&user.username));
        let _ = writeln!(out, "YAML_USER_{i}_PASS_ENV={}", quote(&user.password_env));
    }

    out
}

/// Renders a resolved configuration as the `RESOLVED_*` variable set.
///
/// Users are rendered by name and password-variable name only; the resolved
/// secrets themselves are deliberately absent.
#[must_use]
pub fn render_resolved(config: &ServerConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "RESOLVED_ADDRESS={}", quote(&config.address));
    let _ = writeln!(out, "RESOLVED_MIN_PORT={}", config.min_port);
    let _ = writeln!(out, "RESOLVED_MAX_PORT={}", config.max_port);

    let (cert, key) = config
        .tls
        .as_ref()
        .map_or(("", ""), |tls| (tls.cert.as_str(), tls.key.as_str()));
    let _ = writeln!(out, "RESOLVED_TLS_CERT={}", quote(cert));
    let _ = writeln!(out, "RESOLVED_TLS_KEY={}", quote(key));
    let _ = writeln!(out, "RESOLVED_USER_COUNT={}", config.users.len());

    for (i, user) in config.users.iter().enumerate() {
        let _ = writeln!(out, "RESOLVED_USER_{i}_NAME={}", quote(&user.username));
        let _ = writeln!(
            out,
            "RESOLVED_USER_{i}_PASS_ENV={}",
            quote(&user.password_env)
        );
    }

    out
}
