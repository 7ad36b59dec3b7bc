//! Client facade.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use url::Url;

use crate::Result;
use crate::api::{ApiContext, RouterClient, SurveillanceStation};
use crate::auth::{Credentials, SessionId, SessionManager};
use crate::discovery::{ApiDescriptor, ApiInfo, ApiResolver, CachedResolver, DiscoveryResolver};
use crate::transport::{HttpTransport, Transport};
use crate::types::HostUrl;

/// A client for one NAS, holding at most one session.
///
/// The client owns its transport; dropping the client releases the
/// connection pool. Use is expected to be serialized: sign in before any
/// feature call and do not sign out while a feature call is in flight.
/// Callers needing parallel sessions create several clients.
///
/// # Example
///
/// ```no_run
/// use synoapi::{Credentials, SynologyClient};
///
/// # async fn example() -> Result<(), synoapi::Error> {
/// let client = SynologyClient::new("https://router.local:8001")?;
/// client.sign_in(&Credentials::new("admin", "secret"), None).await?;
///
/// for device in client.router().connected_devices().await? {
///     println!("{:?} {:?}", device.hostname, device.ip4);
/// }
///
/// client.sign_out(None).await?;
/// # Ok(())
/// # }
/// ```
pub struct SynologyClient<T = HttpTransport, R = DiscoveryResolver<T>> {
    host: HostUrl,
    transport: Arc<T>,
    resolver: R,
    session: SessionManager,
}

impl SynologyClient {
    /// Create a client for `host` over the default HTTP transport.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `host`
    /// is not an absolute http(s) URL.
    pub fn new(host: impl AsRef<str>) -> Result<Self> {
        let host = HostUrl::new(host)?;
        Ok(Self::with_transport(host, HttpTransport::new()?))
    }
}

impl<T: Transport> SynologyClient<T> {
    /// Create a client over a caller-provided transport.
    pub fn with_transport(host: HostUrl, transport: T) -> Self {
        let transport = Arc::new(transport);
        let resolver = DiscoveryResolver::new(host.clone(), transport.clone());
        Self {
            host,
            transport,
            resolver,
            session: SessionManager::new(),
        }
    }

    /// List the APIs the NAS advertises, optionally narrowed to one name.
    pub async fn query_apis(&self, filter: Option<&str>) -> Result<BTreeMap<String, ApiInfo>> {
        self.resolver.query(filter).await
    }
}

impl<T: Transport, R: ApiResolver> SynologyClient<T, R> {
    /// Replace the resolver, e.g. with a decorator.
    pub fn with_resolver<R2: ApiResolver>(
        self,
        wrap: impl FnOnce(R) -> R2,
    ) -> SynologyClient<T, R2> {
        SynologyClient {
            host: self.host,
            transport: self.transport,
            resolver: wrap(self.resolver),
            session: self.session,
        }
    }

    /// Cache discovery results for the lifetime of the client.
    ///
    /// Without this every call performs its own discovery request.
    pub fn with_cached_discovery(self) -> SynologyClient<T, CachedResolver<R>> {
        self.with_resolver(CachedResolver::new)
    }

    /// Returns the NAS base URL.
    pub fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the resolver, e.g. to invalidate cached descriptors.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// True while a session is held.
    pub async fn is_signed_in(&self) -> bool {
        self.session.is_signed_in().await
    }

    /// Sign in; see [`SessionManager::sign_in`].
    pub async fn sign_in(&self, credentials: &Credentials, session: Option<&str>) -> Result<()> {
        self.session
            .sign_in(
                &self.host,
                &self.resolver,
                &*self.transport,
                credentials,
                session,
            )
            .await
    }

    /// Sign out; see [`SessionManager::sign_out`].
    pub async fn sign_out(&self, session: Option<&str>) -> Result<()> {
        self.session
            .sign_out(&self.host, &self.resolver, &*self.transport, session)
            .await
    }

    /// Router device inventory.
    pub fn router(&self) -> RouterClient<'_, Self> {
        RouterClient::new(self)
    }

    /// Surveillance Station cameras and recordings.
    pub fn surveillance(&self) -> SurveillanceStation<'_, Self> {
        SurveillanceStation::new(self)
    }
}

#[async_trait]
impl<T: Transport, R: ApiResolver> ApiContext for SynologyClient<T, R> {
    fn host(&self) -> &HostUrl {
        &self.host
    }

    async fn session_id(&self) -> Result<SessionId> {
        self.session.current().await
    }

    #[instrument(skip(self))]
    async fn resolve(&self, api: &str) -> Result<ApiDescriptor> {
        self.resolver.resolve(api).await
    }

    async fn get(&self, url: &Url) -> Result<String> {
        self.transport.get(url).await
    }

    async fn post_form(&self, url: &Url, fields: &[(String, String)]) -> Result<String> {
        self.transport.post_form(url, fields).await
    }
}

impl<T, R> std::fmt::Debug for SynologyClient<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynologyClient")
            .field("host", &self.host)
            .field("session", &self.session)
            .finish()
    }
}
