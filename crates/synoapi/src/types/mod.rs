//! Validated primitive types.

mod host_url;

pub use host_url::HostUrl;
