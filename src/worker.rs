//! Service worker entry points. `static/sw.js` registers the install /
//! fetch / activate listeners synchronously and hands each event to one of
//! the exports below once the wasm module has loaded.

use std::rc::Rc;

use log::{error, info, Level};
use once_cell::unsync::OnceCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::js_sys::{self, Promise};
use web_sys::{Request, ServiceWorkerGlobalScope};

use crate::error::CacheError;
use crate::offline::cache::OfflineCache;
use crate::offline::manifest::CacheManifest;
use crate::offline::web::{BrowserCacheStorage, BrowserNetwork};

type BrowserOfflineCache = OfflineCache<BrowserCacheStorage, BrowserNetwork>;

thread_local! {
    static OFFLINE_CACHE: OnceCell<Rc<BrowserOfflineCache>> = OnceCell::new();
}

fn to_js(e: CacheError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn build() -> Result<Rc<BrowserOfflineCache>, JsValue> {
    console_error_panic_hook::set_once();
    // A second init in the same worker is harmless.
    let _ = console_log::init_with_level(Level::Info);

    let scope: ServiceWorkerGlobalScope = js_sys::global().dyn_into()?;
    let storage = BrowserCacheStorage::new(&scope).map_err(to_js)?;
    let manifest = CacheManifest::default();
    info!("Offline worker loaded for {}", manifest.cache_name());
    Ok(Rc::new(OfflineCache::new(manifest, storage, BrowserNetwork::new(scope))))
}

fn offline_cache() -> Result<Rc<BrowserOfflineCache>, JsValue> {
    OFFLINE_CACHE.with(|cell| cell.get_or_try_init(build).map(Rc::clone))
}

/// Precaches the manifest. Rejects, failing the install, if any URL cannot
/// be stored.
#[wasm_bindgen(js_name = installOfflineCache)]
pub fn install_offline_cache() -> Promise {
    future_to_promise(async move {
        let cache = offline_cache()?;
        cache.install().await.map_err(|e| {
            error!("Install failed: {}", e);
            to_js(e)
        })?;
        Ok(JsValue::UNDEFINED)
    })
}

/// Answers an intercepted request, cache first.
#[wasm_bindgen(js_name = respondFromCache)]
pub fn respond_from_cache(request: Request) -> Promise {
    future_to_promise(async move {
        let cache = offline_cache()?;
        let served = cache.respond(&request).await.map_err(to_js)?;
        Ok(served.into_inner().into())
    })
}

/// Drops every cache generation except the current one.
#[wasm_bindgen(js_name = activateOfflineCache)]
pub fn activate_offline_cache() -> Promise {
    future_to_promise(async move {
        let cache = offline_cache()?;
        let deleted = cache.activate().await.map_err(to_js)?;
        info!("Activated {}, removed {} old caches", cache.manifest().cache_name(), deleted.len());
        Ok(JsValue::UNDEFINED)
    })
}
