//! Web API request builder.

use std::fmt;

use url::Url;

use super::endpoints::SID_PARAM;
use crate::Result;
use crate::auth::SessionId;
use crate::discovery::ApiDescriptor;
use crate::types::HostUrl;

/// Parameters whose values never appear in `Debug` output.
const SECRET_PARAMS: &[&str] = &[SID_PARAM, "passwd"];

/// A single Web API call: endpoint path plus ordered parameters.
///
/// The same parameters are sent either as a query string
/// ([`ApiRequest::url`]) or as form fields ([`ApiRequest::fields`]).
#[derive(Clone)]
pub struct ApiRequest {
    path: String,
    params: Vec<(String, String)>,
}

impl ApiRequest {
    /// Start a request for `api`/`method` at the resolved path and maximum version.
    pub fn new(descriptor: &ApiDescriptor, api: &str, method: &str) -> Self {
        Self::at(&descriptor.path, api, method, descriptor.max_version)
    }

    /// Start a request at an explicit path and version.
    pub fn at(path: &str, api: &str, method: &str, version: u32) -> Self {
        Self {
            path: path.to_string(),
            params: vec![
                ("api".to_string(), api.to_string()),
                ("method".to_string(), method.to_string()),
                ("version".to_string(), version.to_string()),
            ],
        }
    }

    /// Append a parameter.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Append the session id.
    pub fn sid(self, sid: &SessionId) -> Self {
        self.param(SID_PARAM, sid.as_str())
    }

    /// Endpoint path, relative to `/webapi/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The endpoint URL without parameters.
    pub fn endpoint(&self, host: &HostUrl) -> Result<Url> {
        host.webapi_url(&self.path)
    }

    /// The endpoint URL with all parameters percent-encoded into the query string.
    pub fn url(&self, host: &HostUrl) -> Result<Url> {
        let mut url = self.endpoint(host)?;
        url.query_pairs_mut().extend_pairs(&self.params);
        Ok(url)
    }

    /// The parameters as form fields.
    pub fn fields(&self) -> &[(String, String)] {
        &self.params
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| {
                if SECRET_PARAMS.contains(&k.as_str()) {
                    (k.as_str(), "[REDACTED]")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("ApiRequest")
            .field("path", &self.path)
            .field("params", &params)
            .finish()
    }
}
