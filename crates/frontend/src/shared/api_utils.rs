//! URL helpers for talking to the backend.

use crate::shared::config::config;

/// Base URL of the backend.
///
/// The configured `base_url` wins. Otherwise the page's own protocol and host
/// are used with the configured port.
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// `path` should start with "/api/".
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8080/", "/api/dia-chi-khach-hang"),
            "http://localhost:8080/api/dia-chi-khach-hang"
        );
        assert_eq!(join_url("https://shop.vn", "api/x"), "https://shop.vn/api/x");
    }
}
