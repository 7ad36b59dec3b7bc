//! Network resolver backed by `SYNO.API.Info`.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use super::{ApiDescriptor, ApiInfo, ApiResolver};
use crate::envelope::Envelope;
use crate::error::{DiscoveryError, Error};
use crate::transport::Transport;
use crate::types::HostUrl;
use crate::webapi::{ApiRequest, INFO_API, INFO_PATH, INFO_VERSION, METHOD_QUERY};
use crate::Result;

/// Label used in errors for an unfiltered listing.
const ALL_APIS: &str = "ALL";

/// Resolver that performs a discovery call on every resolution.
#[derive(Debug, Clone)]
pub struct DiscoveryResolver<T> {
    host: HostUrl,
    transport: Arc<T>,
}

impl<T: Transport> DiscoveryResolver<T> {
    /// Create a resolver for `host` sharing `transport`.
    pub fn new(host: HostUrl, transport: Arc<T>) -> Self {
        Self { host, transport }
    }

    /// List the APIs the service advertises, optionally narrowed to one name.
    #[instrument(skip(self), fields(host = %self.host))]
    pub async fn query(&self, filter: Option<&str>) -> Result<BTreeMap<String, ApiInfo>> {
        let label = filter.unwrap_or(ALL_APIS);
        let data = self.fetch(filter).await?;

        let Value::Object(entries) = data else {
            return Err(malformed(label, "data is not an object"));
        };

        entries
            .into_iter()
            .map(|(name, entry)| {
                let info: ApiInfo =
                    serde_json::from_value(entry).map_err(|e| malformed(&name, e))?;
                Ok((name, info))
            })
            .collect()
    }

    /// Issue the discovery request and return its `data` object.
    async fn fetch(&self, filter: Option<&str>) -> Result<Value> {
        let label = filter.unwrap_or(ALL_APIS);

        let mut request = ApiRequest::at(INFO_PATH, INFO_API, METHOD_QUERY, INFO_VERSION);
        if let Some(api) = filter {
            request = request.param("query", api);
        }
        let url = request.url(&self.host)?;

        debug!(api = label, "Querying API info");
        let body = self.transport.get(&url).await.map_err(|e| match e {
            Error::Transport(source) => DiscoveryError::Transport {
                api: label.to_string(),
                source,
            }
            .into(),
            other => other,
        })?;

        let envelope = Envelope::parse(&body).map_err(|e| malformed(label, e))?;
        if envelope.is_failure() {
            return Err(DiscoveryError::Failed {
                api: label.to_string(),
                code: envelope.error_code(),
            }
            .into());
        }

        // An absent success flag is accepted here as long as data is present.
        envelope
            .data()
            .cloned()
            .ok_or_else(|| malformed(label, "missing data"))
    }
}

#[async_trait]
impl<T: Transport> ApiResolver for DiscoveryResolver<T> {
    #[instrument(skip(self), fields(host = %self.host))]
    async fn resolve(&self, api: &str) -> Result<ApiDescriptor> {
        let data = self.fetch(Some(api)).await?;

        let entry = data
            .get(api)
            .cloned()
            .ok_or_else(|| DiscoveryError::MissingApi {
                api: api.to_string(),
            })?;

        let descriptor: ApiDescriptor =
            serde_json::from_value(entry).map_err(|e| malformed(api, e))?;

        debug!(
            path = %descriptor.path,
            version = descriptor.max_version,
            "Resolved API"
        );
        Ok(descriptor)
    }
}

fn malformed(api: &str, reason: impl ToString) -> Error {
    DiscoveryError::Malformed {
        api: api.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
