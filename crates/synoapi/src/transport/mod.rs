//! HTTP transport abstraction.
//!
//! The protocol layers above only ever need two verbs: a GET of a fully
//! built URL and a form-encoded POST. [`HttpTransport`] is the network
//! implementation; tests substitute their own.

mod http;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::Result;

pub use http::{HttpTransport, HttpTransportBuilder};

/// Performs raw HTTP exchanges and returns the response body text.
///
/// Implementations must report a non-success HTTP status as
/// [`TransportError::Status`](crate::error::TransportError::Status) before
/// the body is interpreted.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` (query string included).
    async fn get(&self, url: &Url) -> Result<String>;

    /// POST `fields` form-encoded to `url`.
    async fn post_form(&self, url: &Url, fields: &[(String, String)]) -> Result<String>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &Url) -> Result<String> {
        (**self).get(url).await
    }

    async fn post_form(&self, url: &Url, fields: &[(String, String)]) -> Result<String> {
        (**self).post_form(url, fields).await
    }
}
