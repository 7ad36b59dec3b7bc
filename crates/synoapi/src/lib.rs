//! synoapi - Synology NAS Web API client
//!
//! Every Synology Web API call is a two-phase exchange: the symbolic API name
//! (e.g. `SYNO.SurveillanceStation.Camera`) is first resolved to a concrete
//! endpoint path and version through the `SYNO.API.Info` discovery call, and
//! only then is the real request issued with that path, the negotiated
//! version and the session id obtained at sign-in.
//!
//! All feature calls flow through a [`SynologyClient`].
//!
//! # Example
//!
//! ```no_run
//! use synoapi::{Credentials, Page, SynologyClient};
//!
//! # async fn example() -> Result<(), synoapi::Error> {
//! let client = SynologyClient::new("https://nas.local:5001")?;
//! client
//!     .sign_in(&Credentials::new("admin", "secret"), None)
//!     .await?;
//!
//! let cameras = client.surveillance().cameras(Page::default()).await?;
//! for camera in &cameras {
//!     println!("{}: {:?}", camera.id, camera.new_name);
//! }
//!
//! client.sign_out(None).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod discovery;
pub mod envelope;
pub mod error;
pub mod models;
pub mod transport;
pub mod types;
mod webapi;

// Re-export primary types at crate root for convenience
pub use api::{ApiContext, Page, RouterClient, SurveillanceStation};
pub use auth::{Credentials, SessionId, SessionManager};
pub use client::SynologyClient;
pub use discovery::{ApiDescriptor, ApiInfo, ApiResolver, CachedResolver, DiscoveryResolver};
pub use envelope::{Envelope, ErrorCode};
pub use error::Error;
pub use models::{Camera, Device, LiveStream, Recording, StreamInfo};
pub use transport::{HttpTransport, Transport};
pub use types::HostUrl;
pub use webapi::ApiRequest;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
