//! API discovery.
//!
//! Before any Web API call the symbolic API name must be resolved to the CGI
//! path that serves it and the version to speak. This module provides the
//! [`ApiResolver`] seam, the network [`DiscoveryResolver`] and the opt-in
//! [`CachedResolver`] decorator.

mod cache;
mod resolver;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

pub use cache::CachedResolver;
pub use resolver::DiscoveryResolver;

/// Where and at which version an API is served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescriptor {
    /// Endpoint path relative to `/webapi/`.
    pub path: String,
    /// Highest version the service advertises.
    pub max_version: u32,
}

/// A full entry of a discovery listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    pub path: String,
    #[serde(default)]
    pub min_version: Option<u32>,
    pub max_version: u32,
    #[serde(default)]
    pub request_format: Option<String>,
}

impl From<ApiInfo> for ApiDescriptor {
    fn from(info: ApiInfo) -> Self {
        Self {
            path: info.path,
            max_version: info.max_version,
        }
    }
}

/// Resolves a symbolic API name to its descriptor.
#[async_trait]
pub trait ApiResolver: Send + Sync {
    /// Resolve `api` (e.g. `SYNO.API.Auth`).
    ///
    /// The advertised maximum version is always selected; the minimum
    /// version is not negotiated because low versions of some APIs do not
    /// work even when advertised.
    async fn resolve(&self, api: &str) -> Result<ApiDescriptor>;
}
