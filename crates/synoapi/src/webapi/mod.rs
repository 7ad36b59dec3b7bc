//! Web API request plumbing.
//!
//! This module holds the fixed wire constants and the request builder shared
//! by discovery, authentication and the feature clients.

mod endpoints;
mod request;

pub(crate) use endpoints::*;
pub use request::ApiRequest;
