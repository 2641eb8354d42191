use contracts::domain::a001_customer_address::aggregate::CustomerAddress;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Entry of the left navigation: page key, title, icon name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: String,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Pages reachable from the navigation, in menu order.
pub fn menu_entries() -> Vec<MenuEntry> {
    vec![MenuEntry {
        key: CustomerAddress::full_name(),
        title: CustomerAddress::list_name(),
        icon: "map-pin",
    }]
}

/// Page shown when the URL names nothing known.
pub fn default_page_key() -> String {
    CustomerAddress::full_name()
}

pub fn is_known_page(key: &str) -> bool {
    menu_entries().iter().any(|entry| entry.key == key)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(default_page_key()),
            left_open: RwSignal::new(true),
        }
    }

    /// Keeps the active page in sync with `?active=` in the address bar.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            if is_known_page(active_key) {
                self.activate(active_key);
            } else {
                log::warn!("Unknown page in URL: '{}'", active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn activate(&self, key: &str) {
        log::debug!("activate page: '{}'", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
