//! Session id type.

use std::fmt;

/// The session id (`sid`) issued by `SYNO.API.Auth` login.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a session id string.
    pub fn new(sid: impl Into<String>) -> Self {
        Self(sid.into())
    }

    /// Returns the raw value, for building `_sid` parameters.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionId").field(&"[REDACTED]").finish()
    }
}
