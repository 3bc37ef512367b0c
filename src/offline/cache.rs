//! Install / fetch / activate lifecycle of the offline cache.
//!
//! The browser's `CacheStorage` and `fetch` sit behind [`CacheStorage`] and
//! [`Network`], so the same lifecycle runs in the service worker and against
//! the in-memory fakes in the tests below.

use async_trait::async_trait;
use futures::future::try_join_all;
use log::{info, warn};

use crate::error::CacheError;
use crate::offline::manifest::CacheManifest;

#[async_trait(?Send)]
pub trait CacheStorage {
    type Response;

    async fn keys(&self) -> Result<Vec<String>, CacheError>;
    async fn delete(&self, cache_name: &str) -> Result<bool, CacheError>;
    /// Stores every entry into `cache_name`, opening it if needed.
    async fn put_all(&self, cache_name: &str, entries: Vec<(String, Self::Response)>) -> Result<(), CacheError>;
    /// Exact-URL lookup across every cache store.
    async fn lookup(&self, url: &str) -> Result<Option<Self::Response>, CacheError>;
}

#[async_trait(?Send)]
pub trait Network {
    type Request;
    type Response;

    /// Plain GET of a manifest URL.
    async fn fetch(&self, url: &str) -> Result<Self::Response, CacheError>;
    /// Sends the intercepted request on unchanged (mode, credentials,
    /// redirect policy and all).
    async fn forward(&self, request: &Self::Request) -> Result<Self::Response, CacheError>;
    fn status(response: &Self::Response) -> u16;
    fn url_of(request: &Self::Request) -> String;
    /// Only GETs can have a stored answer.
    fn cacheable(request: &Self::Request) -> bool;
}

/// Where a fetched resource came from.
#[derive(Debug, PartialEq, Eq)]
pub enum Served<R> {
    Cache(R),
    Network(R),
}

impl<R> Served<R> {
    pub fn into_inner(self) -> R {
        match self {
            Served::Cache(r) | Served::Network(r) => r,
        }
    }
}

pub struct OfflineCache<S, N> {
    manifest: CacheManifest,
    storage: S,
    network: N,
}

impl<S, N, R> OfflineCache<S, N>
where
    S: CacheStorage<Response = R>,
    N: Network<Response = R>,
{
    pub fn new(manifest: CacheManifest, storage: S, network: N) -> Self {
        Self { manifest, storage, network }
    }

    pub fn manifest(&self) -> &CacheManifest {
        &self.manifest
    }

    /// Fetches the whole manifest and stores it under the current cache
    /// name. Nothing is stored unless every fetch succeeds.
    pub async fn install(&self) -> Result<(), CacheError> {
        let name = self.manifest.cache_name();
        info!("Installing {} ({} resources)", name, self.manifest.urls.len());

        let responses = try_join_all(self.manifest.urls.iter().map(|url| self.fetch_ok(url))).await?;
        let entries = self.manifest.urls.iter().cloned().zip(responses).collect();
        if let Err(e) = self.storage.put_all(&name, entries).await {
            // Storing is not atomic; drop whatever made it in before the failure.
            if let Err(cleanup) = self.storage.delete(&name).await {
                warn!("Could not discard partial cache {}: {}", name, cleanup);
            }
            return Err(e);
        }

        info!("Installed {}", name);
        Ok(())
    }

    async fn fetch_ok(&self, url: &str) -> Result<R, CacheError> {
        let response = self.network.fetch(url).await?;
        match N::status(&response) {
            200..=299 => Ok(response),
            status => Err(CacheError::Status { url: url.to_string(), status }),
        }
    }

    /// Cache-first: a stored response is returned as is, otherwise the
    /// original request goes to the network and nothing is written back.
    pub async fn respond(&self, request: &N::Request) -> Result<Served<R>, CacheError> {
        if N::cacheable(request) {
            let url = N::url_of(request);
            match self.storage.lookup(&url).await {
                Ok(Some(hit)) => return Ok(Served::Cache(hit)),
                Ok(None) => {}
                Err(e) => warn!("Cache lookup for {} failed, going to network: {}", url, e),
            }
        }
        self.network.forward(request).await.map(Served::Network)
    }

    /// Deletes every cache generation other than the current one and
    /// returns the names removed.
    pub async fn activate(&self) -> Result<Vec<String>, CacheError> {
        let current = self.manifest.cache_name();
        let stale: Vec<String> = self
            .storage
            .keys()
            .await?
            .into_iter()
            .filter(|name| *name != current)
            .collect();

        for name in &stale {
            info!("Deleting old cache {}", name);
            self.storage.delete(name).await?;
        }
        Ok(stale)
    }
}
