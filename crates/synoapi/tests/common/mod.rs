#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use synoapi::{HostUrl, HttpTransport, Result, SynologyClient, Transport};
use url::Url;
use wiremock::MockServer;

/// Wraps another transport and counts every exchange.
pub struct CountingTransport<T> {
    inner: T,
    calls: Arc<AtomicUsize>,
}

impl<T> CountingTransport<T> {
    /// Returns the transport and a handle to its call counter.
    pub fn new(inner: T) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let transport = Self {
            inner,
            calls: calls.clone(),
        };
        (transport, calls)
    }
}

#[async_trait]
impl<T: Transport> Transport for CountingTransport<T> {
    async fn get(&self, url: &Url) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(url).await
    }

    async fn post_form(&self, url: &Url, fields: &[(String, String)]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.post_form(url, fields).await
    }
}

/// Host URL of a mock server.
pub fn mock_host(server: &MockServer) -> HostUrl {
    HostUrl::new(server.uri()).unwrap()
}

/// A client over a counting HTTP transport pointed at the mock server.
pub fn counting_client(
    server: &MockServer,
) -> (
    SynologyClient<CountingTransport<HttpTransport>>,
    Arc<AtomicUsize>,
) {
    let (transport, calls) = CountingTransport::new(HttpTransport::new().unwrap());
    (
        SynologyClient::with_transport(mock_host(server), transport),
        calls,
    )
}

/// Number of exchanges recorded by a counter.
pub fn count(calls: &AtomicUsize) -> usize {
    calls.load(Ordering::SeqCst)
}
