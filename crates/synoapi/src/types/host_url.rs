//! NAS host URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidArgumentError};

/// A validated NAS base URL, e.g. `https://nas.local:5001`.
///
/// The URL must be absolute, use `http` or `https` and name a host.
/// Endpoint URLs are built below its `/webapi/` directory.
///
/// # Example
///
/// ```
/// use synoapi::HostUrl;
///
/// let host = HostUrl::new("https://nas.local:5001/").unwrap();
/// assert_eq!(host.webapi_url("query.cgi").unwrap().as_str(),
///            "https://nas.local:5001/webapi/query.cgi");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HostUrl(Url);

impl HostUrl {
    /// Create a new host URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the URL is not absolute, uses
    /// another scheme, has no host, or carries a query or fragment.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidArgumentError::Host {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL of a Web API endpoint path (as advertised by discovery).
    pub fn webapi_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.0.as_str().trim_end_matches('/');
        let raw = format!("{}/webapi/{}", base, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| {
            InvalidArgumentError::Host {
                value: raw,
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidArgumentError::Host {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidArgumentError::Host {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidArgumentError::Host {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidArgumentError::Host {
                value: original.to_string(),
                reason: "must not have a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HostUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for HostUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for HostUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HostUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
