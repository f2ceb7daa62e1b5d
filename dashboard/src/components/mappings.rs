//! Mappings tab component
//!
//! owns the pager for the admin table. every navigation goes through
//! `load`, which tags the request so a late response for a page the user
//! already left never overwrites the table.

use leptos::logging::{error, log};
use leptos::prelude::*;
use shared::{DashboardConfig, MappingsPager, MappingsView};

use super::mappings_table::MappingsTable;
use super::pagination::Pagination;
use crate::api;

#[component]
pub fn MappingsTab() -> impl IntoView {
    let config = StoredValue::new(use_context::<DashboardConfig>().unwrap_or_default());
    let pager = StoredValue::new(MappingsPager::new(config.with_value(|c| c.page_size)));
    let (state, set_state) = signal(MappingsView::Loading);
    let (total_count, set_total_count) = signal::<Option<u64>>(None);

    let load = move |page: u32| {
        let Some(ticket) = pager.try_update_value(|p| p.begin_load(page)) else {
            return;
        };
        let page_size = pager.with_value(MappingsPager::page_size);
        set_state.set(MappingsView::Loading);

        leptos::task::spawn_local(async move {
            let result = api::fetch_mappings(&config.get_value(), ticket.page(), page_size).await;
            if let Err(e) = &result {
                error!("error fetching mappings: {e}");
            }

            match pager.try_update_value(|p| p.finish_load(ticket, result)).flatten() {
                Some(view) => {
                    set_total_count.set(pager.with_value(MappingsPager::total_count));
                    set_state.set(view);
                }
                None => log!("dropping stale response for page {}", ticket.page()),
            }
        });
    };

    // initial load
    Effect::new(move || load(1));

    // last loaded total; a failed or pending load leaves it alone
    let total = move || {
        total_count
            .get()
            .map(|count| count.to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class="card">
            <h2>"📋 URL Mappings"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                "Total URLs: "<span id="totalUrls">{total}</span>
            </p>

            <MappingsTable body=Signal::derive(move || state.with(MappingsView::table_body)) />
            <Pagination
                controls=Signal::derive(move || state.with(MappingsView::pagination))
                on_navigate=Callback::new(move |page: u32| load(page))
            />
        </div>
    }
}
