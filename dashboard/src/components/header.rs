//! Header component

use leptos::prelude::*;

use super::tabs::Tab;

/// app title plus a shortcut to the admin table
#[component]
pub fn Header(set_active_tab: WriteSignal<Tab>) -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Link Admin"</h1>
                <p class="subtitle">"Shorten URLs and browse stored mappings"</p>
            </div>
            <a
                href="#mappings"
                class="badge"
                on:click=move |ev| {
                    ev.prevent_default();
                    set_active_tab.set(Tab::Mappings);
                }
            >
                "Admin"
            </a>
        </header>
    }
}
