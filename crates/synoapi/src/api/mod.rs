//! Feature clients.
//!
//! Each feature client is a thin value over an [`ApiContext`], the capability
//! set (host, session, resolver, transport) every Web API call needs.
//! Operations follow one template: session guard, argument checks, API
//! resolution, request, envelope decoding.

mod router;
mod surveillance;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::Result;
use crate::auth::SessionId;
use crate::discovery::ApiDescriptor;
use crate::envelope::{Envelope, decode_data};
use crate::error::{Error, InvalidArgumentError};
use crate::types::HostUrl;
use crate::webapi::ApiRequest;

pub use router::RouterClient;
pub use surveillance::{SurveillanceStation, playback_uri};

/// What a feature client needs from its owner.
#[async_trait]
pub trait ApiContext: Send + Sync {
    /// Base URL of the NAS.
    fn host(&self) -> &HostUrl;

    /// The current session id, or [`Error::NotLoggedIn`].
    async fn session_id(&self) -> Result<SessionId>;

    /// Resolve a symbolic API name.
    async fn resolve(&self, api: &str) -> Result<ApiDescriptor>;

    /// GET a fully built URL.
    async fn get(&self, url: &Url) -> Result<String>;

    /// POST form fields.
    async fn post_form(&self, url: &Url, fields: &[(String, String)]) -> Result<String>;
}

/// Pagination window for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Page {
    /// Default number of items per page.
    pub const DEFAULT_LIMIT: u32 = 100;

    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
}

/// Static description of one feature operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operation {
    /// Name reported in [`Error::OperationFailed`].
    pub name: &'static str,
    pub api: &'static str,
    pub method: &'static str,
    pub verb: Verb,
}

impl Operation {
    /// Resolve, send and unwrap the envelope, returning its `data`.
    ///
    /// The caller has already checked the session and its arguments.
    pub(crate) async fn call<C>(
        &self,
        ctx: &C,
        sid: &SessionId,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value>
    where
        C: ApiContext + ?Sized,
    {
        let descriptor = ctx.resolve(self.api).await?;
        let request = params
            .into_iter()
            .fold(
                ApiRequest::new(&descriptor, self.api, self.method),
                |request, (key, value)| request.param(key, value),
            )
            .sid(sid);

        debug!(operation = self.name, ?request, "Calling Web API");

        let body = match self.verb {
            Verb::Get => ctx.get(&request.url(ctx.host())?).await?,
            Verb::Post => {
                ctx.post_form(&request.endpoint(ctx.host())?, request.fields())
                    .await?
            }
        };

        Envelope::parse(&body)
            .map_err(|e| self.decode_error(e))?
            .into_data()
            .map_err(|code| Error::OperationFailed {
                operation: self.name,
                code,
            })
    }

    /// Decode `data` (or its `key` member) into typed records.
    pub(crate) fn decode<T: DeserializeOwned>(&self, data: Value, key: Option<&str>) -> Result<T> {
        decode_data(data, key).map_err(|e| self.decode_error(e))
    }

    fn decode_error(&self, reason: impl ToString) -> Error {
        Error::Decode {
            operation: self.name,
            reason: reason.to_string(),
        }
    }
}

/// Comma-join a required, non-empty id list.
pub(crate) fn join_ids(field: &'static str, ids: &[i64]) -> Result<String> {
    if ids.is_empty() {
        return Err(InvalidArgumentError::Empty { field }.into());
    }
    Ok(ids
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(","))
}
