use crate::config::{CACHE_PREFIX, CACHE_VERSION, PRECACHE_URLS};

/// The resources one cache generation keeps available offline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheManifest {
    pub prefix: String,
    pub version: String,
    pub urls: Vec<String>,
}

impl Default for CacheManifest {
    fn default() -> Self {
        Self::new(CACHE_PREFIX, CACHE_VERSION, PRECACHE_URLS)
    }
}

impl CacheManifest {
    pub fn new<I, S>(prefix: &str, version: &str, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.to_string(),
            version: version.to_string(),
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the cache store for this generation, e.g. `zelion-cricket-v1`.
    pub fn cache_name(&self) -> String {
        format!("{}-{}", self.prefix, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_matches_shipped_assets() {
        let manifest = CacheManifest::default();
        assert_eq!(manifest.cache_name(), "zelion-cricket-v1");
        assert_eq!(
            manifest.urls,
            vec![
                "/",
                "/styles/main.css",
                "/scripts/main.js",
                "/images/favicon-32x32.png",
                "/images/product-kit.png",
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css",
            ]
        );
    }
}
