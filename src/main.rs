#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod hooks;
mod services;
mod stores;
mod utils;

use components::ProfileCard;
use services::navigation::Navigator;
use stores::profile_store;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting digicard");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The no-op port stands in until a real navigation integration exists
    use_context_provider(Navigator::noop);

    rsx! {
        ProfileCard {
            profile: profile_store::sample_profile(),
        }
    }
}
