//! Shorten form component
//!
//! intercepts the form submission, posts the url as a urlencoded form and
//! shows the returned short url with a copy button.

use leptos::logging::error;
use leptos::prelude::*;
use shared::{DashboardConfig, Notice, ShortenResult};

use crate::{api, browser};

#[component]
pub fn ShortenTab() -> impl IntoView {
    let config = StoredValue::new(use_context::<DashboardConfig>().unwrap_or_default());
    let action = config.with_value(DashboardConfig::shorten_url);

    let (url_input, set_url_input) = signal(String::new());
    let (result, set_result) = signal::<Option<ShortenResult>>(None);
    let (loading, set_loading) = signal(false);

    // submit: the result panel only changes on success
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // the url is opaque; the backend rejects empty or malformed values
        if loading.get_untracked() {
            return;
        }
        let url = url_input.get_untracked();

        set_loading.set(true);

        leptos::task::spawn_local(async move {
            match api::shorten_url(&config.get_value(), &url).await {
                Ok(shortened) => set_result.set(Some(shortened)),
                Err(e) => {
                    error!("shorten request failed: {e}");
                    browser::notify(&Notice::for_shorten_error(&e));
                }
            }
            set_loading.set(false);
        });
    };

    // copy the short url currently on display
    let copy = move |_| {
        let Some(text) = result.with_untracked(|r| r.as_ref().map(|r| r.short_url.clone())) else {
            return;
        };

        leptos::task::spawn_local(async move {
            match browser::copy_to_clipboard(&text).await {
                Ok(()) => browser::notify(&Notice::Copied),
                Err(e) => {
                    error!("could not copy text: {e}");
                    browser::notify(&Notice::CopyFailed);
                }
            }
        });
    };

    view! {
        <div class="card">
            <h2>"🔗 Shorten a URL"</h2>

            <form id="shortenForm" action=action method="post" on:submit=submit>
                <div class="input-group">
                    <input
                        type="text"
                        name="url"
                        placeholder="https://example.com/very/long/url"
                        prop:value=move || url_input.get()
                        on:input=move |ev| set_url_input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() {
                            view! { <span class="spinner"></span> " Shortening..." }.into_any()
                        } else {
                            view! { "Shorten" }.into_any()
                        }}
                    </button>
                </div>
            </form>

            // result panel
            <Show when=move || result.with(Option::is_some)>
                <div id="result" class="result success">
                    <div class="result-label">"Short URL"</div>
                    <div class="result-value">
                        {move || result.get().map(|r| {
                            let href = r.short_url.clone();
                            view! {
                                <a id="shortUrlLink" href=href target="_blank" rel="noopener noreferrer">
                                    {r.short_url}
                                </a>
                            }
                        })}
                    </div>
                    <button id="copyButton" type="button" on:click=copy>"Copy"</button>
                </div>
            </Show>
        </div>
    }
}
