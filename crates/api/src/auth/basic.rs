//! HTTP Basic credential parsing and verification.
//!
//! The service accepts exactly one username/password pair, loaded from the
//! environment at startup. Comparison is constant-time.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use subtle::ConstantTimeEq;

/// Realm advertised in the `WWW-Authenticate` challenge.
pub const AUTH_REALM: &str = "museums";

/// A username/password pair decoded from an `Authorization: Basic ...` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Decode a raw `Authorization` header value.
    ///
    /// Returns `None` for anything that is not a well-formed Basic header:
    /// a missing or different scheme, invalid base64, non-UTF-8 content, or a
    /// decoded payload without a colon. The payload is split on the first
    /// colon, so passwords may themselves contain colons.
    pub fn from_header(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// The credentials the API accepts.
#[derive(Clone)]
pub struct ApiCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ApiCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load the accepted credentials from environment variables.
    ///
    /// | Env Var               | Required |
    /// |-----------------------|----------|
    /// | `MUSEUM_API_USERNAME` | **yes**  |
    /// | `MUSEUM_API_PASSWORD` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if either variable is unset or empty.
    pub fn from_env() -> Self {
        let username = std::env::var("MUSEUM_API_USERNAME")
            .expect("MUSEUM_API_USERNAME must be set in the environment");
        let password = std::env::var("MUSEUM_API_PASSWORD")
            .expect("MUSEUM_API_PASSWORD must be set in the environment");
        assert!(!username.is_empty(), "MUSEUM_API_USERNAME must not be empty");
        assert!(!password.is_empty(), "MUSEUM_API_PASSWORD must not be empty");

        Self::new(username, password)
    }

    /// Exact, case-sensitive match on both username and password.
    pub fn verify(&self, presented: &BasicCredentials) -> bool {
        let user_ok = self.username.as_bytes().ct_eq(presented.username.as_bytes());
        let pass_ok = self.password.as_bytes().ct_eq(presented.password.as_bytes());
        bool::from(user_ok & pass_ok)
    }

    /// Parse a raw header and verify it in one step.
    pub fn verify_header(&self, value: &str) -> bool {
        BasicCredentials::from_header(value).is_some_and(|creds| self.verify(&creds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn parses_username_and_password() {
        let creds = BasicCredentials::from_header(&header("curator:s3cret")).unwrap();
        assert_eq!(creds.username, "curator");
        assert_eq!(creds.password, "s3cret");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let creds = BasicCredentials::from_header(&header("curator:a:b")).unwrap();
        assert_eq!(creds.username, "curator");
        assert_eq!(creds.password, "a:b");
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(BasicCredentials::from_header("").is_none());
        assert!(BasicCredentials::from_header("Basic").is_none());
        assert!(BasicCredentials::from_header("Bearer abc.def").is_none());
        assert!(BasicCredentials::from_header("Basic !!!not-base64!!!").is_none());
        assert!(BasicCredentials::from_header(&header("no-colon-here")).is_none());
        let non_utf8 = format!("Basic {}", STANDARD.encode([0xff, 0xfe, b':', b'x']));
        assert!(BasicCredentials::from_header(&non_utf8).is_none());
    }

    #[test]
    fn verify_requires_exact_match() {
        let accepted = ApiCredentials::new("curator", "s3cret");

        assert!(accepted.verify_header(&header("curator:s3cret")));
        assert!(!accepted.verify_header(&header("Curator:s3cret")));
        assert!(!accepted.verify_header(&header("curator:S3CRET")));
        assert!(!accepted.verify_header(&header("curator:s3cret ")));
        assert!(!accepted.verify_header(&header("curator:")));
        assert!(!accepted.verify_header("garbage"));
    }

    #[test]
    fn debug_output_redacts_password() {
        let accepted = ApiCredentials::new("curator", "s3cret");
        let rendered = format!("{accepted:?}");
        assert!(rendered.contains("curator"));
        assert!(!rendered.contains("s3cret"));
    }
}
