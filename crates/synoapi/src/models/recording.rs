//! Surveillance Station recording.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::unix_time;

/// A recording listed by `SYNO.SurveillanceStation.Recording`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    pub id: i64,
    #[serde(default)]
    pub camera_id: Option<i64>,
    #[serde(default)]
    pub camera_name: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub size_byte: Option<i64>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub audio_codec: Option<i64>,
    #[serde(default)]
    pub video_codec: Option<i64>,
    /// Unix seconds.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Unix seconds.
    #[serde(default)]
    pub stop_time: Option<i64>,
}

impl Recording {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.start_time)
    }

    pub fn stopped_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.stop_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_camel_case_fields() {
        let recording: Recording = serde_json::from_value(json!({
            "id": 42,
            "cameraId": 3,
            "cameraName": "Porch",
            "filePath": "/volume1/surveillance/Porch/20240101AM/Porch-20240101-000000.mp4",
            "sizeByte": 1048576,
            "startTime": 1704067200
        }))
        .unwrap();

        assert_eq!(recording.id, 42);
        assert_eq!(recording.camera_id, Some(3));
        assert_eq!(recording.camera_name.as_deref(), Some("Porch"));
        assert_eq!(recording.size_byte, Some(1048576));
        assert_eq!(
            recording.started_at().unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
        assert!(recording.stopped_at().is_none());
    }

    #[test]
    fn id_is_required() {
        assert!(serde_json::from_value::<Recording>(json!({"cameraId": 3})).is_err());
    }
}
