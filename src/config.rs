
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where the subscription form posts to. Opt-in at build time with
/// `ZELION_SUBSCRIBE_PATH=/api/subscribe`; without it every profile keeps
/// the simulated submitter, which waits `SUBMIT_DELAY_MS` and always succeeds.
pub fn subscribe_endpoint() -> Option<String> {
    subscribe_endpoint_for(option_env!("ZELION_SUBSCRIBE_PATH"))
}

fn subscribe_endpoint_for(path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", get_backend_url(), p))
}

pub const CAROUSEL_AUTOPLAY_MS: u32 = 5_000;
pub const SUBMIT_DELAY_MS: u32 = 2_000;

// Fixed navbar height subtracted from section offsets when scrolling.
pub const HEADER_OFFSET: f64 = 80.0;
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const SUBSCRIPTION_SECTION_ID: &str = "email-subscription-form";
pub const SERVICE_WORKER_PATH: &str = "/sw.js";

pub const CACHE_PREFIX: &str = "zelion-cricket";
pub const CACHE_VERSION: &str = "v1";

pub const PRECACHE_URLS: [&str; 6] = [
    "/",
    "/styles/main.css",
    "/scripts/main.js",
    "/images/favicon-32x32.png",
    "/images/product-kit.png",
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_endpoint_unless_configured() {
        assert_eq!(subscribe_endpoint_for(None), None);
        assert_eq!(subscribe_endpoint_for(Some("")), None);
        assert_eq!(
            subscribe_endpoint_for(Some("/api/subscribe")),
            Some(format!("{}/api/subscribe", get_backend_url()))
        );
    }

    #[test]
    fn shipped_build_has_no_endpoint() {
        if option_env!("ZELION_SUBSCRIBE_PATH").is_none() {
            assert_eq!(subscribe_endpoint(), None);
        }
    }
}
