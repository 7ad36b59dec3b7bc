//! Surveillance Station cameras and live-view paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{text_or_number, unix_time};

/// A camera listed by `SYNO.SurveillanceStation.Camera`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: i64,
    #[serde(default)]
    pub new_name: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub port: Option<i64>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub status_flags: Option<i64>,
    #[serde(default)]
    pub audio_codec: Option<i64>,
    #[serde(default)]
    pub video_codec: Option<i64>,
    #[serde(default)]
    pub video_mode: Option<String>,
    #[serde(default)]
    pub live_view_source: Option<i64>,
    #[serde(default)]
    pub rotate_option: Option<i64>,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub rec_share: Option<String>,
    #[serde(default)]
    pub rec_share_mount_type: Option<i64>,
    #[serde(default)]
    pub rec_share_path: Option<String>,
    #[serde(default)]
    pub rec_status: Option<i64>,
    #[serde(default)]
    pub rec_storage_status: Option<i64>,
    #[serde(default)]
    pub rec_volume: Option<String>,
    #[serde(default)]
    pub record_time: Option<i64>,
    #[serde(default)]
    pub recording_keep_days: Option<i64>,
    #[serde(default)]
    pub recording_keep_size: Option<String>,
    #[serde(default)]
    pub volume_space: Option<String>,
    #[serde(default)]
    pub stream1: Option<StreamInfo>,
    #[serde(default)]
    pub stream2: Option<StreamInfo>,
    #[serde(default)]
    pub stream3: Option<StreamInfo>,
    #[serde(default)]
    pub stream4: Option<StreamInfo>,
    /// Unix seconds.
    #[serde(default)]
    pub update_time: Option<i64>,
}

impl Camera {
    /// Last configuration change.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.update_time)
    }

    /// The configured video streams, in profile order.
    pub fn streams(&self) -> impl Iterator<Item = &StreamInfo> {
        [&self.stream1, &self.stream2, &self.stream3, &self.stream4]
            .into_iter()
            .flatten()
    }
}

/// Video stream profile of a camera.
///
/// Keys the service reports beyond the common ones are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamInfo {
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub fps: Option<i64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub quality: Option<String>,
    #[serde(default)]
    pub bitrate_ctrl: Option<i64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub constant_bitrate: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Live-view paths of one camera (`GetLiveViewPath`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStream {
    pub id: i64,
    #[serde(default)]
    pub mjpeg_http_path: Option<String>,
    #[serde(default)]
    pub multicast_path: Option<String>,
    #[serde(default)]
    pub mxpeg_http_path: Option<String>,
    #[serde(default)]
    pub rtsp_over_http_path: Option<String>,
    #[serde(default)]
    pub rtsp_path: Option<String>,
}
