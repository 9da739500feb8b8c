//! HTTP Basic authentication credentials.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Credentials for HTTP Basic authentication against the manager.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Renders the `Authorization` header value: `Basic base64(user:pass)`.
    ///
    /// No validation happens here; malformed credentials simply produce a
    /// header the server rejects at request time.
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}
