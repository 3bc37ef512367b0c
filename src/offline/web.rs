use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{self, Array};
use web_sys::{Cache, Request, Response, ServiceWorkerGlobalScope};

use crate::error::CacheError;
use crate::offline::cache::{CacheStorage, Network};

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub struct BrowserCacheStorage {
    caches: web_sys::CacheStorage,
}

impl BrowserCacheStorage {
    pub fn new(scope: &ServiceWorkerGlobalScope) -> Result<Self, CacheError> {
        let caches = scope.caches().map_err(|e| CacheError::Lookup(js_reason(&e)))?;
        Ok(Self { caches })
    }

    async fn open(&self, cache_name: &str) -> Result<Cache, CacheError> {
        let open_err = |e: JsValue| CacheError::Open { name: cache_name.to_string(), reason: js_reason(&e) };
        JsFuture::from(self.caches.open(cache_name))
            .await
            .map_err(open_err)?
            .dyn_into::<Cache>()
            .map_err(open_err)
    }
}

#[async_trait(?Send)]
impl CacheStorage for BrowserCacheStorage {
    type Response = Response;

    async fn keys(&self) -> Result<Vec<String>, CacheError> {
        let keys = JsFuture::from(self.caches.keys())
            .await
            .map_err(|e| CacheError::Lookup(js_reason(&e)))?;
        Ok(Array::from(&keys).iter().filter_map(|k| k.as_string()).collect())
    }

    async fn delete(&self, cache_name: &str) -> Result<bool, CacheError> {
        let deleted = JsFuture::from(self.caches.delete(cache_name))
            .await
            .map_err(|e| CacheError::Delete { name: cache_name.to_string(), reason: js_reason(&e) })?;
        Ok(deleted.as_bool().unwrap_or(false))
    }

    async fn put_all(&self, cache_name: &str, entries: Vec<(String, Response)>) -> Result<(), CacheError> {
        let cache = self.open(cache_name).await?;
        for (url, response) in entries {
            JsFuture::from(cache.put_with_str(&url, &response))
                .await
                .map_err(|e| CacheError::Store { url: url.clone(), reason: js_reason(&e) })?;
        }
        Ok(())
    }

    async fn lookup(&self, url: &str) -> Result<Option<Response>, CacheError> {
        let found = JsFuture::from(self.caches.match_with_str(url))
            .await
            .map_err(|e| CacheError::Lookup(js_reason(&e)))?;
        if found.is_undefined() {
            return Ok(None);
        }
        found
            .dyn_into::<Response>()
            .map(Some)
            .map_err(|e| CacheError::Lookup(js_reason(&e)))
    }
}

pub struct BrowserNetwork {
    scope: ServiceWorkerGlobalScope,
}

impl BrowserNetwork {
    pub fn new(scope: ServiceWorkerGlobalScope) -> Self {
        Self { scope }
    }
}

impl BrowserNetwork {
    async fn send(&self, url: &str, pending: js_sys::Promise) -> Result<Response, CacheError> {
        let fetch_err = |e: JsValue| CacheError::Fetch { url: url.to_string(), reason: js_reason(&e) };
        JsFuture::from(pending)
            .await
            .map_err(fetch_err)?
            .dyn_into::<Response>()
            .map_err(fetch_err)
    }
}

#[async_trait(?Send)]
impl Network for BrowserNetwork {
    type Request = Request;
    type Response = Response;

    async fn fetch(&self, url: &str) -> Result<Response, CacheError> {
        self.send(url, self.scope.fetch_with_str(url)).await
    }

    async fn forward(&self, request: &Request) -> Result<Response, CacheError> {
        self.send(&request.url(), self.scope.fetch_with_request(request)).await
    }

    fn status(response: &Response) -> u16 {
        response.status()
    }

    fn url_of(request: &Request) -> String {
        request.url()
    }

    fn cacheable(request: &Request) -> bool {
        request.method() == "GET"
    }
}
