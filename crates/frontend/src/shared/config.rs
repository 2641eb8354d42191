//! Client configuration.
//!
//! Defaults are compiled in as TOML. The API base URL can be overridden at
//! runtime through the `api_base_url` key in localStorage, which is handy when
//! the static bundle is served from a different host than the backend.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// localStorage key holding an API base URL override
pub const API_BASE_STORAGE_KEY: &str = "api_base_url";

const DEFAULT_CONFIG: &str = r#"
[api]
# Empty base_url: same host as the page, on `port`
base_url = ""
port = 8080

[list]
default_page_size = 10
page_size_options = [10, 25, 50]
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

pub fn parse_config(text: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(text)
}

fn default_config() -> ClientConfig {
    // DEFAULT_CONFIG is covered by tests
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Default config is invalid: {}", e);
        ClientConfig {
            api: ApiConfig {
                base_url: String::new(),
                port: 8080,
            },
            list: ListConfig {
                default_page_size: 10,
                page_size_options: vec![10, 25, 50],
            },
        }
    })
}

fn storage_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(API_BASE_STORAGE_KEY).ok()??;
    let value = value.trim().trim_end_matches('/').to_string();
    (!value.is_empty()).then_some(value)
}

static CONFIG: Lazy<ClientConfig> = Lazy::new(|| {
    let mut config = default_config();
    if let Some(base_url) = storage_override() {
        log::info!("API base URL overridden from localStorage: {}", base_url);
        config.api.base_url = base_url;
    }
    config
});

pub fn config() -> &'static ClientConfig {
    &CONFIG
}
