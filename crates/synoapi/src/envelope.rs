//! Response envelope codec.
//!
//! Every Synology Web API response is wrapped in
//! `{"success": bool, "data": ..., "error": {"code": n}}`. This is the only
//! module that parses raw response text.

use std::fmt;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Synology Web API error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub i64);

impl ErrorCode {
    /// Returns the documented meaning of the code, for the codes shared by
    /// all APIs.
    ///
    /// Codes from 400 up are API specific and get no description here.
    pub fn description(&self) -> Option<&'static str> {
        let text = match self.0 {
            100 => "unknown error",
            101 => "no parameter of API, method or version",
            102 => "the requested API does not exist",
            103 => "the requested method does not exist",
            104 => "the requested version does not support the functionality",
            105 => "the logged in session does not have permission",
            106 => "session timeout",
            107 => "session interrupted by duplicate login",
            _ => return None,
        };
        Some(text)
    }

    /// Like [`description`](Self::description), with the `SYNO.API.Auth`
    /// codes added. Only meaningful for sign-in and sign-out responses.
    pub fn auth_description(&self) -> Option<&'static str> {
        let text = match self.0 {
            400 => "no such account or incorrect password",
            401 => "account disabled",
            402 => "permission denied",
            403 => "2-step verification code required",
            404 => "failed to authenticate 2-step verification code",
            _ => return self.description(),
        };
        Some(text)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(text) => write!(f, "{} ({})", self.0, text),
            None => write!(f, "{}", self.0),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<ErrorCode>,
}

/// A decoded response envelope.
///
/// `success` is `None` when the service omitted the flag; discovery payloads
/// are accepted in that case, every other call treats it as failure.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<ErrorBody>,
}

impl Envelope {
    /// Parse a response body.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// True only when the service explicitly reported success.
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }

    /// True when the service explicitly reported failure.
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// The error code reported by the service, if any.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error.as_ref().and_then(|e| e.code)
    }

    /// The raw data payload.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Consume a successful envelope, yielding its data payload.
    ///
    /// Returns the error code when the envelope did not report success.
    /// A successful envelope without data yields `Value::Null`.
    pub fn into_data(self) -> Result<Value, Option<ErrorCode>> {
        if self.is_success() {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(self.error_code())
        }
    }
}

/// Decode a typed value from a data payload, optionally from one of its keys.
///
/// With a key, `data` must be an object.
pub fn decode_data<T: DeserializeOwned>(
    data: Value,
    key: Option<&str>,
) -> Result<T, serde_json::Error> {
    let value = match (key, data) {
        (Some(key), Value::Object(mut map)) => map.remove(key).unwrap_or(Value::Null),
        (Some(key), _) => {
            return Err(de::Error::custom(format_args!(
                "expected an object holding '{key}'"
            )));
        }
        (None, data) => data,
    };
    serde_json::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_yields_data() {
        let envelope = Envelope::parse(r#"{"success":true,"data":{"sid":"abc"}}"#).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.into_data().unwrap(), json!({"sid": "abc"}));
    }

    #[test]
    fn failure_envelope_yields_error_code() {
        let envelope = Envelope::parse(r#"{"success":false,"error":{"code":105}}"#).unwrap();
        assert!(envelope.is_failure());
        assert_eq!(envelope.into_data().unwrap_err(), Some(ErrorCode(105)));
    }

    #[test]
    fn bare_failure_has_no_code() {
        let envelope = Envelope::parse(r#"{"success":false}"#).unwrap();
        assert_eq!(envelope.into_data().unwrap_err(), None);
    }

    #[test]
    fn missing_flag_is_neither_success_nor_failure() {
        let envelope = Envelope::parse(r#"{"data":{}}"#).unwrap();
        assert!(!envelope.is_success());
        assert!(!envelope.is_failure());
        assert!(envelope.data().is_some());
    }

    #[test]
    fn non_json_body_is_rejected() {
        assert!(Envelope::parse("<html>").is_err());
    }

    #[test]
    fn decode_data_from_key() {
        let ids: Vec<i64> = decode_data(json!({"ids": [1, 2]}), Some("ids")).unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn decode_data_with_key_rejects_non_object() {
        let result: Result<Vec<i64>, _> = decode_data(json!([1, 2]), Some("ids"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("'ids'"));
    }

    #[test]
    fn decode_data_without_key_takes_whole_payload() {
        let ids: Vec<i64> = decode_data(json!([1, 2]), None).unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn unknown_code_displays_number_only() {
        assert_eq!(ErrorCode(9999).to_string(), "9999");
        assert_eq!(ErrorCode(106).to_string(), "106 (session timeout)");
    }

    #[test]
    fn auth_codes_only_described_for_auth() {
        assert_eq!(ErrorCode(400).description(), None);
        assert_eq!(ErrorCode(400).to_string(), "400");
        assert_eq!(
            ErrorCode(400).auth_description(),
            Some("no such account or incorrect password")
        );
        assert_eq!(ErrorCode(106).auth_description(), Some("session timeout"));
    }
}
