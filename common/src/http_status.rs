//! HTTP status codes carried by API errors.

/// HTTP status code reported by the Dumpling AI API.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 401/403: the credential was rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.0, 401 | 403)
    }

    /// 429: too many requests or exhausted quota window.
    pub fn is_rate_limited(&self) -> bool {
        self.0 == 429
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
