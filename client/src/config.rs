//! Compile-time site configuration.
//!
//! Both values are baked into the WASM bundle and the SSR build through
//! `option_env!`, so the browser never needs a runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default base URL of the external contact service.
pub const DEFAULT_API_URL: &str = "https://developer-portfolio-l936.onrender.com";

/// Default prefix for project image paths.
pub const DEFAULT_ASSET_BASE: &str = "/";

/// Base URL of the service that receives contact submissions.
pub fn api_base_url() -> &'static str {
    option_env!("PORTFOLIO_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Prefix prepended to catalog image paths.
pub fn asset_base() -> &'static str {
    option_env!("PORTFOLIO_ASSET_BASE").unwrap_or(DEFAULT_ASSET_BASE)
}

/// Join the contact route onto a base URL, tolerating a trailing slash.
pub fn contact_endpoint(base_url: &str) -> String {
    format!("{}/contact", base_url.trim_end_matches('/'))
}

/// Resolve an image path against the asset base with exactly one separator.
pub fn image_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
