//! Error types for the synoapi library.
//!
//! This module provides a unified error type with explicit variants for
//! caller input, session preconditions, transport, discovery and
//! service-level envelope failures.

use thiserror::Error;

use crate::envelope::ErrorCode;

/// The unified error type for synoapi operations.
///
/// Every variant is terminal for the call that raised it; nothing in this
/// library retries.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad caller input, detected before any network I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgumentError),

    /// A feature call or sign-out was attempted without a session.
    #[error("not logged in")]
    NotLoggedIn,

    /// Sign-in was attempted while a session is already held.
    #[error("already logged in")]
    AlreadyLoggedIn,

    /// Network transport errors (connection, timeout, HTTP status).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The discovery call could not produce a descriptor for an API.
    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Sign-in was rejected by the service.
    #[error("unauthorized{}", fmt_auth_code(.code))]
    Authentication { code: Option<ErrorCode> },

    /// Sign-out was rejected by the service. The session id is kept.
    #[error("logout failed{}", fmt_auth_code(.code))]
    Logout { code: Option<ErrorCode> },

    /// The service answered a feature call with a failed envelope.
    #[error("{operation} failed{}", fmt_code(.code))]
    OperationFailed {
        operation: &'static str,
        code: Option<ErrorCode>,
    },

    /// The response body was not a valid envelope, or its data had the wrong shape.
    #[error("malformed {operation} response: {reason}")]
    Decode {
        operation: &'static str,
        reason: String,
    },
}

fn fmt_code(code: &Option<ErrorCode>) -> String {
    match code {
        Some(code) => format!(": {}", code),
        None => String::new(),
    }
}

fn fmt_auth_code(code: &Option<ErrorCode>) -> String {
    match code {
        Some(code) => match code.auth_description() {
            Some(text) => format!(": {} ({})", code.0, text),
            None => format!(": {}", code),
        },
        None => String::new(),
    }
}

impl Error {
    /// Returns the service error code, if the service reported one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Error::Authentication { code }
            | Error::Logout { code }
            | Error::OperationFailed { code, .. } => *code,
            Error::Discovery(DiscoveryError::Failed { code, .. }) => *code,
            _ => None,
        }
    }
}

/// Invalid caller input.
#[derive(Debug, Error)]
pub enum InvalidArgumentError {
    /// Invalid host URL.
    #[error("invalid host '{value}': {reason}")]
    Host { value: String, reason: String },

    /// A required value was empty.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

// Request URLs carry `passwd` and `_sid`, so messages are built without them.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Discovery (`SYNO.API.Info`) errors.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The discovery envelope reported failure.
    #[error("query for '{api}' failed{}", fmt_code(.code))]
    Failed {
        api: String,
        code: Option<ErrorCode>,
    },

    /// The discovery request itself could not be completed.
    #[error("query for '{api}' could not be sent: {source}")]
    Transport {
        api: String,
        #[source]
        source: TransportError,
    },

    /// The requested API is not advertised by the service.
    #[error("API '{api}' is not available")]
    MissingApi { api: String },

    /// The discovery payload could not be parsed.
    #[error("malformed descriptor for '{api}': {reason}")]
    Malformed { api: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_failed_names_the_operation() {
        let err = Error::OperationFailed {
            operation: "GetCameras",
            code: None,
        };
        assert_eq!(err.to_string(), "GetCameras failed");
    }

    #[test]
    fn authentication_error_includes_known_description() {
        let err = Error::Authentication {
            code: Some(ErrorCode(400)),
        };
        let text = err.to_string();
        assert!(text.starts_with("unauthorized: 400"));
        assert!(text.contains("password"));
        assert_eq!(err.code(), Some(ErrorCode(400)));
    }

    #[test]
    fn auth_codes_are_not_applied_to_other_apis() {
        let err = Error::OperationFailed {
            operation: "GetCameras",
            code: Some(ErrorCode(400)),
        };
        assert_eq!(err.to_string(), "GetCameras failed: 400");
        assert!(!err.to_string().contains("password"));
    }

    #[test]
    fn logout_error_keeps_common_description() {
        let err = Error::Logout {
            code: Some(ErrorCode(106)),
        };
        assert_eq!(err.to_string(), "logout failed: 106 (session timeout)");
    }

    #[test]
    fn status_error_display() {
        let err = Error::from(TransportError::Status { status: 503 });
        assert_eq!(err.to_string(), "transport error: HTTP 503");
    }
}
