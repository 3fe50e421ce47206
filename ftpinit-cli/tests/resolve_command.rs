//! Integration tests for the `resolve` subcommand.
//!
//! Exercises the three operating modes (config-only, env-only,
//! env-overrides) at the process boundary, plus semantic failures and the
//! no-secrets-in-output guarantee.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const OVERRIDE_VARS: &[&str] = &[
    "ADDRESS",
    "MIN_PORT",
    "MAX_PORT",
    "TLS_CERT",
    "TLS_KEY",
    "USERS",
];

fn resolve() -> Command {
    let mut cmd = Command::cargo_bin("ftpinit").expect("Failed to find ftpinit binary");
    cmd.arg("resolve");
    for var in OVERRIDE_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_defaults_with_no_config_and_no_overrides() {
    resolve()
        .assert()
        .success()
        .stdout(predicate::str::contains("RESOLVED_ADDRESS='0.0.0.0'"))
        .stdout(predicate::str::contains("RESOLVED_MIN_PORT=21000"))
        .stdout(predicate::str::contains("RESOLVED_MAX_PORT=21010"))
        .stdout(predicate::str::contains("RESOLVED_TLS_CERT=''"))
        .stdout(predicate::str::contains("RESOLVED_TLS_KEY=''"))
        .stdout(predicate::str::contains("RESOLVED_USER_COUNT=0"));
}

#[test]
fn test_config_only_mode() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
server:
  address: "10.0.0.1"
  min_port: 22020
  max_port: 22029
users:
  - username: "user1"
    password_env: "USER1_PASS"
"#,
    );

    resolve()
        .arg("--config")
        .arg(&config)
        .env("USER1_PASS", "secret-one")
        .assert()
        .success()
        .stdout(predicate::str::contains("RESOLVED_ADDRESS='10.0.0.1'"))
        .stdout(predicate::str::contains("RESOLVED_MIN_PORT=22020"))
        .stdout(predicate::str::contains("RESOLVED_MAX_PORT=22029"))
        .stdout(predicate::str::contains("RESOLVED_USER_COUNT=1"))
        .stdout(predicate::str::contains("RESOLVED_USER_0_NAME='user1'"))
        .stdout(predicate::str::contains(
            "RESOLVED_USER_0_PASS_ENV='USER1_PASS'",
        ));
}

#[test]
fn test_env_overrides_mode() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
server:
  address: "10.0.0.1"
  min_port: 22020
  max_port: 22029
"#,
    );

    // The environment wins per field; YAML supplies the rest.
    resolve()
        .arg("--config")
        .arg(&config)
        .env("ADDRESS", "127.0.0.1")
        .env("MIN_PORT", "22000")
        .assert()
        .success()
        .stdout(predicate::str::contains("RESOLVED_ADDRESS='127.0.0.1'"))
        .stdout(predicate::str::contains("RESOLVED_MIN_PORT=22000"))
        .stdout(predicate::str::contains("RESOLVED_MAX_PORT=22029"));
}

#[test]
fn test_env_only_mode_with_users() {
    resolve()
        .env("ADDRESS", "0.0.0.0")
        .env("MIN_PORT", "22000")
        .env("MAX_PORT", "22009")
        .env("USERS", "user1 user2")
        .env("USER1_PASS", "pw-one")
        .env("USER2_PASS", "pw-two")
        .assert()
        .success()
        .stdout(predicate::str::contains("RESOLVED_MIN_PORT=22000"))
        .stdout(predicate::str::contains("RESOLVED_MAX_PORT=22009"))
        .stdout(predicate::str::contains("RESOLVED_USER_COUNT=2"))
        .stdout(predicate::str::contains("RESOLVED_USER_0_NAME='user1'"))
        .stdout(predicate::str::contains(
            "RESOLVED_USER_0_PASS_ENV='USER1_PASS'",
        ))
        .stdout(predicate::str::contains("RESOLVED_USER_1_NAME='user2'"));
}

#[test]
fn test_user_without_password_is_excluded() {
    resolve()
        .env("USERS", "user1 user2")
        .env("USER1_PASS", "pw-one")
        .assert()
        .success()
        .stdout(predicate::str::contains("RESOLVED_USER_COUNT=1"))
        .stdout(predicate::str::contains("RESOLVED_USER_0_NAME='user1'"))
        .stdout(predicate::str::contains("user2").not());
}

#[test]
fn test_passwords_never_appear_in_output() {
    resolve()
        .env("USERS", "user1")
        .env("USER1_PASS", "super-secret-value")
        .assert()
        .success()
        .stdout(predicate::str::contains("super-secret-value").not());
}

#[test]
fn test_inverted_range_fails() {
    resolve()
        .env("MIN_PORT", "22029")
        .env("MAX_PORT", "22020")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn test_non_numeric_port_fails() {
    resolve()
        .env("MIN_PORT", "twenty")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid port number"));
}

#[test]
fn test_tls_pair_resolves() {
    resolve()
        .env("TLS_CERT", "/etc/ftp/cert.pem")
        .env("TLS_KEY", "/etc/ftp/key.pem")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "RESOLVED_TLS_CERT='/etc/ftp/cert.pem'",
        ))
        .stdout(predicate::str::contains(
            "RESOLVED_TLS_KEY='/etc/ftp/key.pem'",
        ));
}

#[test]
fn test_half_tls_pair_fails() {
    resolve()
        .env("TLS_CERT", "/etc/ftp/cert.pem")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tls_key"));
}

#[test]
fn test_missing_config_file_falls_back_to_env() {
    let dir = TempDir::new().unwrap();

    resolve()
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .env("ADDRESS", "192.168.1.1")
        .assert()
        .success()
        .stdout(predicate::str::contains("RESOLVED_ADDRESS='192.168.1.1'"));
}
