//! Refnet membership front-end
//!
//! Browser SPA for the referral-network platform: registration, dashboard,
//! profile and bank details, PIN vouchers, withdrawals, and the lazy
//! referral-tree view. All business logic lives behind the remote API.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("refnet web starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading shell from index.html once the WASM bundle runs.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        let _ = loading.set_attribute("style", "display: none;");
    }
}
