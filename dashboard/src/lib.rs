//! ==============================================================================
//! lib.rs - Link Admin Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm dashboard for the url shortener backend.
//!     a shorten form with copy-to-clipboard and a paginated admin table
//!     of stored mappings.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the backend via fetch (same origin unless configured)
//!     - view logic lives in the `shared` crate and is tested natively
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod browser;
mod components;

use components::{Header, MappingsTab, ShortenTab, Tab, TabNav};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(browser::load_config());

    let (active_tab, set_active_tab) = signal(Tab::Shorten);

    view! {
        <Title text="Link Admin" />
        <Header set_active_tab=set_active_tab />
        <div class="container">
            <TabNav active_tab=active_tab set_active_tab=set_active_tab />

            <Show when=move || active_tab.get() == Tab::Shorten>
                <ShortenTab />
            </Show>

            <Show when=move || active_tab.get() == Tab::Mappings>
                <MappingsTab />
            </Show>
        </div>
    }
}
