//! Environment helpers for the console shell.

use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const API_BASE_KEY: &str = "admin.api_base";

/// Resolve the issuer-gateway base URL.
///
/// A `LocalStorage` override wins; otherwise the console talks to its own
/// origin, which is where the gateway is mounted in every deployment.
pub(crate) fn api_base_url() -> String {
    if let Ok(value) = LocalStorage::get::<String>(API_BASE_KEY) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return trimmed.trim_end_matches('/').to_string();
        }
    }

    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    if let Ok(url) = Url::new(&href) {
        let mut base = format!("{}//{}", url.protocol(), url.hostname());
        let port = url.port();
        if !port.is_empty() {
            base.push(':');
            base.push_str(&port);
        }
        return base;
    }

    "http://localhost:8080".to_string()
}
