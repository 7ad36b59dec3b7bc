//! Records decoded from Web API `data` payloads.
//!
//! Every field other than the identifying key is optional: the service omits
//! fields freely, and an absent value means "unknown", not `false` or zero.

mod camera;
mod device;
mod recording;

pub use camera::{Camera, LiveStream, StreamInfo};
pub use device::Device;
pub use recording::Recording;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Convert a unix timestamp in seconds, as the service reports them.
pub(crate) fn unix_time(seconds: Option<i64>) -> Option<DateTime<Utc>> {
    seconds.and_then(|s| DateTime::from_timestamp(s, 0))
}

/// Accept a value the service reports either as a string or as a number.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format_args!(
            "expected a string or number, got {other}"
        ))),
    }
}
