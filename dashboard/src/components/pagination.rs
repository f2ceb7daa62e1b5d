//! Pagination controls
//!
//! one click listener on the container; clickable controls carry the target
//! page in `data-page`.

use leptos::prelude::*;
use shared::pagination::{parse_page_attribute, PAGE_ATTRIBUTE};
use shared::{NavControl, PageControl, PaginationView};
use wasm_bindgen::JsCast;

/// page number of the control an event originated from
fn page_from_event(ev: &web_sys::MouseEvent) -> Option<u32> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let control = target.closest(&format!("[{PAGE_ATTRIBUTE}]")).ok()??;
    parse_page_attribute(&control.get_attribute(PAGE_ATTRIBUTE)?)
}

fn nav_control(label: &'static str, control: NavControl) -> AnyView {
    match control {
        NavControl::Active(page) => view! {
            <a href="#" data-page=page.to_string()>{label}</a>
        }
        .into_any(),
        NavControl::Disabled => view! { <span class="disabled">{label}</span> }.into_any(),
    }
}

fn page_control(control: PageControl) -> AnyView {
    match control {
        PageControl::Current(page) => view! { <span class="current">{page}</span> }.into_any(),
        PageControl::Link(page) => view! {
            <a href="#" data-page=page.to_string()>{page}</a>
        }
        .into_any(),
    }
}

#[component]
pub fn Pagination(
    #[prop(into)] controls: Signal<Option<PaginationView>>,
    on_navigate: Callback<u32>,
) -> impl IntoView {
    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(page) = page_from_event(&ev) {
            ev.prevent_default();
            on_navigate.run(page);
        }
    };

    view! {
        <div id="paginationControls" class="pagination" on:click=on_click>
            {move || controls.get().map(|current| view! {
                {nav_control("Previous", current.previous)}
                {current.pages.into_iter().map(page_control).collect_view()}
                {nav_control("Next", current.next)}
            })}
        </div>
    }
}
