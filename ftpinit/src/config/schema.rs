//! Schema for the consumed YAML subset.
//!
//! The bootstrap reads a two-level document: a `server` mapping of scalar
//! settings and a `users` list of `{username, password_env}` records. Keys
//! outside this subset are ignored. All scalars deserialize into [`Scalar`],
//! which carries the value as text; numeric validation happens later in the
//! resolver, never in the parser.

use serde::{Deserialize, Deserializer};

/// A YAML scalar carried as text.
///
/// YAML writers are free to quote or not quote values, so `min_port: 21000`
/// arrives as an integer while `min_port: "21000"` arrives as a string. Both
/// deserialize into the same textual form here.
///
/// # Examples
///
/// ```
/// use ftpinit::config::Scalar;
///
/// let quoted: Scalar = serde_yaml::from_str("\"21000\"").unwrap();
/// let bare: Scalar = serde_yaml::from_str("21000").unwrap();
/// assert_eq!(quoted, bare);
/// assert_eq!(bare.as_str(), "21000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scalar(String);

impl Scalar {
    /// Returns the textual value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the scalar, returning the textual value.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Bool(bool),
            Int(i64),
            Float(f64),
            Str(String),
        }

        Ok(match Helper::deserialize(deserializer)? {
            Helper::Bool(b) => Self(b.to_string()),
            Helper::Int(i) => Self(i.to_string()),
            Helper::Float(f) => Self(f.to_string()),
            Helper::Str(s) => Self(s),
        })
    }
}

/// The root of the configuration document.
///
/// Both sections are optional; a document containing neither (or nothing at
/// all) is a valid, empty configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ConfigDocument {
    /// Server settings.
    pub server: Option<ServerSection>,

    /// Ordered list of user records.
    pub users: Option<Vec<UserRecord>>,
}

/// The `server` mapping of the configuration document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ServerSection {
    /// Listen address.
    pub address: Option<Scalar>,

    /// Lower bound of the passive port range.
    pub min_port: Option<Scalar>,

    /// Upper bound of the passive port range.
    pub max_port: Option<Scalar>,

    /// Path to the TLS certificate.
    pub tls_cert: Option<Scalar>,

    /// Path to the TLS private key.
    pub tls_key: Option<Scalar>,
}

/// One entry of the `users` list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UserRecord {
    /// Account name.
    pub username: Option<Scalar>,

    /// Name of the environment variable holding the account password.
    pub password_env: Option<Scalar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_from_integer() {
        let scalar: Scalar = serde_yaml::from_str("21000").unwrap();
        assert_eq!(scalar.as_str(), "21000");
    }

    #[test]
    fn test_scalar_from_quoted_string() {
        let scalar: Scalar = serde_yaml::from_str(r#""127.0.0.1""#).unwrap();
        assert_eq!(scalar.as_str(), "127.0.0.1");
    }

    #[test]
    fn test_scalar_from_bool() {
        let scalar: Scalar = serde_yaml::from_str("true").unwrap();
        assert_eq!(scalar.as_str(), "true");
    }

    #[test]
    fn test_full_document() {
        let yaml = r#"
server:
  address: "127.0.0.1"
  min_port: 21000
  max_port: 21010
  tls_cert: "/etc/ftp/cert.pem"
  tls_key: "/etc/ftp/key.pem"
users:
  - username: "user1"
    password_env: "USER1_PASS"
  - username: "user2"
    password_env: "USER2_PASS"
"#;
        let doc: ConfigDocument = serde_yaml::from_str(yaml).unwrap();
        let server = doc.server.unwrap();
        assert_eq!(server.address.unwrap().as_str(), "127.0.0.1");
        assert_eq!(server.min_port.unwrap().as_str(), "21000");
        assert_eq!(server.max_port.unwrap().as_str(), "21010");

        let users = doc.users.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username.as_ref().unwrap().as_str(), "user1");
        assert_eq!(
            users[1].password_env.as_ref().unwrap().as_str(),
            "USER2_PASS"
        );
    }

    #[test]
    fn test_partial_document() {
        let yaml = r"
server:
  address: 10.0.0.1
";
        let doc: ConfigDocument = serde_yaml::from_str(yaml).unwrap();
        let server = doc.server.unwrap();
        assert_eq!(server.address.unwrap().as_str(), "10.0.0.1");
        assert!(server.min_port.is_none());
        assert!(doc.users.is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let yaml = r"
server:
  address: 10.0.0.1
  banner: welcome
extra_section:
  key: value
";
        let doc: ConfigDocument = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.server.unwrap().address.unwrap().as_str(), "10.0.0.1");
    }

    #[test]
    fn test_empty_document_is_none() {
        let doc: Option<ConfigDocument> = serde_yaml::from_str("").unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn test_user_record_without_password_env() {
        let yaml = r"
users:
  - username: lonely
";
        let doc: ConfigDocument = serde_yaml::from_str(yaml).unwrap();
        let users = doc.users.unwrap();
        assert_eq!(users[0].username.as_ref().unwrap().as_str(), "lonely");
        assert!(users[0].password_env.is_none());
    }
}
