//! Opt-in descriptor cache.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{ApiDescriptor, ApiResolver};
use crate::Result;

/// Caches the descriptors produced by another resolver, keyed by API name.
///
/// Discovery results are static for a given service instance, so after the
/// first resolution of a name no further discovery call is made until the
/// entry is invalidated. Failed resolutions are not cached.
#[derive(Debug)]
pub struct CachedResolver<R> {
    inner: R,
    entries: RwLock<HashMap<String, ApiDescriptor>>,
}

impl<R: ApiResolver> CachedResolver<R> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The wrapped resolver.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Forget the cached descriptor for `api`.
    pub async fn invalidate(&self, api: &str) {
        self.entries.write().await.remove(api);
    }

    /// Forget every cached descriptor.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of cached descriptors.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl<R: ApiResolver> ApiResolver for CachedResolver<R> {
    #[instrument(skip(self))]
    async fn resolve(&self, api: &str) -> Result<ApiDescriptor> {
        if let Some(descriptor) = self.entries.read().await.get(api) {
            debug!("Descriptor cache hit");
            return Ok(descriptor.clone());
        }

        let descriptor = self.inner.resolve(api).await?;
        self.entries
            .write()
            .await
            .insert(api.to_string(), descriptor.clone());
        Ok(descriptor)
    }
}
