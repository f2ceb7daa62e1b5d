//! Tab navigation component

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Shorten,
    Mappings,
}

impl Tab {
    const ALL: [Tab; 2] = [Tab::Shorten, Tab::Mappings];

    fn label(self) -> &'static str {
        match self {
            Tab::Shorten => "🔗 Shorten",
            Tab::Mappings => "📋 Mappings",
        }
    }
}

#[component]
pub fn TabNav(
    active_tab: ReadSignal<Tab>,
    set_active_tab: WriteSignal<Tab>,
) -> impl IntoView {
    view! {
        <div class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| view! {
                    <button
                        class=move || if active_tab.get() == tab { "tab active" } else { "tab" }
                        on:click=move |_| set_active_tab.set(tab)
                    >
                        {tab.label()}
                    </button>
                })
                .collect_view()}
        </div>
    }
}
