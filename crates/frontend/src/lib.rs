pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = shared::config::config();
    log::info!(
        "Admin console starting, API base: {}",
        shared::api_utils::api_base()
    );
    log::debug!("List page size: {}", config.list.default_page_size);
    // Parse the address catalog up front so a broken catalog shows in the log at once
    shared::address_catalog::hierarchy();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
