//! ==============================================================================
//! browser.rs - window, clipboard and page configuration
//! ==============================================================================

use leptos::logging::{error, warn};
use shared::config::parse_page_size;
use shared::{ClipboardError, DashboardConfig, Notice};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// show a blocking notification
pub fn notify(notice: &Notice) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(&notice.to_string()) {
        error!("could not show notification {notice:?}: {e:?}");
    }
}

/// write `text` to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let navigator = window.navigator();

    // navigator.clipboard is undefined outside secure contexts
    let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false);
    if !has_clipboard {
        return Err(ClipboardError::Unavailable);
    }

    let promise: js_sys::Promise = navigator.clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
}

/// dashboard configuration with overrides from `<body data-*>` attributes
pub fn load_config() -> DashboardConfig {
    let mut config = DashboardConfig::default();

    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return config;
    };

    if let Some(base) = body.get_attribute("data-api-base") {
        config = config.with_api_base(&base);
    }

    if let Some(raw) = body.get_attribute("data-page-size") {
        match parse_page_size(&raw) {
            Ok(size) => config = config.with_page_size(size),
            Err(e) => warn!("{e}; using page size {}", config.page_size),
        }
    }

    config
}
