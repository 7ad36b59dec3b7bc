//! Surveillance Station cameras and recordings.

use tracing::{debug, instrument};
use url::Url;

use super::{ApiContext, Operation, Page, Verb, join_ids};
use crate::Result;
use crate::auth::SessionId;
use crate::discovery::ApiDescriptor;
use crate::models::{Camera, LiveStream, Recording};
use crate::types::HostUrl;
use crate::webapi::{
    ApiRequest, CAMERA_API, METHOD_GET_LIVE_VIEW_PATH, METHOD_LIST, METHOD_STREAM,
    PRIV_LIVE_VIEW, PRIV_RECORDING, RECORDING_API,
};

const GET_CAMERAS: Operation = Operation {
    name: "GetCameras",
    api: CAMERA_API,
    method: METHOD_LIST,
    verb: Verb::Get,
};

const GET_LIVE_STREAMS: Operation = Operation {
    name: "GetLiveStreams",
    api: CAMERA_API,
    method: METHOD_GET_LIVE_VIEW_PATH,
    verb: Verb::Get,
};

const GET_RECORDINGS: Operation = Operation {
    name: "GetRecordings",
    api: RECORDING_API,
    method: METHOD_LIST,
    verb: Verb::Get,
};

/// Surveillance Station resources.
#[derive(Debug)]
pub struct SurveillanceStation<'a, C: ?Sized> {
    ctx: &'a C,
}

impl<'a, C: ApiContext + ?Sized> SurveillanceStation<'a, C> {
    pub fn new(ctx: &'a C) -> Self {
        Self { ctx }
    }

    /// List cameras the session may both watch live and play back.
    #[instrument(skip(self))]
    pub async fn cameras(&self, page: Page) -> Result<Vec<Camera>> {
        let sid = self.ctx.session_id().await?;

        let op = GET_CAMERAS;
        let params = vec![
            ("privCamType", (PRIV_LIVE_VIEW | PRIV_RECORDING).to_string()),
            ("streamInfo", "true".to_string()),
            ("basic", "true".to_string()),
            ("blFromCamList", "true".to_string()),
            ("camStm", "0".to_string()),
            ("offset", page.offset.to_string()),
            ("limit", page.limit.to_string()),
        ];
        let data = op.call(self.ctx, &sid, params).await?;
        let cameras: Vec<Camera> = op.decode(data, Some("cameras"))?;

        debug!(count = cameras.len(), "Listed cameras");
        Ok(cameras)
    }

    /// Live-view paths for the given cameras.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `camera_ids` is empty.
    #[instrument(skip(self))]
    pub async fn live_streams(&self, camera_ids: &[i64]) -> Result<Vec<LiveStream>> {
        let sid = self.ctx.session_id().await?;
        let ids = join_ids("camera_ids", camera_ids)?;

        let op = GET_LIVE_STREAMS;
        let data = op.call(self.ctx, &sid, vec![("idList", ids)]).await?;
        op.decode(data, None)
    }

    /// Recordings of the given cameras.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `camera_ids` is empty.
    #[instrument(skip(self))]
    pub async fn recordings(&self, camera_ids: &[i64], page: Page) -> Result<Vec<Recording>> {
        let sid = self.ctx.session_id().await?;
        let ids = join_ids("camera_ids", camera_ids)?;

        let op = GET_RECORDINGS;
        let params = vec![
            ("cameraIds", ids),
            ("offset", page.offset.to_string()),
            ("limit", page.limit.to_string()),
        ];
        let data = op.call(self.ctx, &sid, params).await?;
        let recordings: Vec<Recording> = op.decode(data, Some("recordings"))?;

        debug!(count = recordings.len(), "Listed recordings");
        Ok(recordings)
    }

    /// URI that streams a recording.
    ///
    /// Only the recording API is resolved; the stream itself is not requested.
    #[instrument(skip(self))]
    pub async fn playback_uri(&self, recording_id: i64) -> Result<Url> {
        let sid = self.ctx.session_id().await?;
        let descriptor = self.ctx.resolve(RECORDING_API).await?;
        playback_uri(self.ctx.host(), &descriptor, recording_id, &sid)
    }
}

/// Format the playback URI of a recording from an already resolved descriptor.
///
/// Makes no request.
pub fn playback_uri(
    host: &HostUrl,
    descriptor: &ApiDescriptor,
    recording_id: i64,
    sid: &SessionId,
) -> Result<Url> {
    ApiRequest::new(descriptor, RECORDING_API, METHOD_STREAM)
        .param("recordingId", recording_id)
        .sid(sid)
        .url(host)
}
