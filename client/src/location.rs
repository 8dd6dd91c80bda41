use leptos::logging::error;
use wasm_bindgen::JsValue;

/// `location.search` of the current page, including the leading `?`.
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Rewrites the address bar query without reloading or adding a history entry.
pub fn replace_search(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(pathname) = window.location().pathname() else {
        return;
    };
    let url = if query.is_empty() {
        pathname
    } else {
        format!("{pathname}?{query}")
    };
    match window.history() {
        Ok(history) => {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                error!("Failed to update address bar: {err:?}");
            }
        }
        Err(err) => error!("History unavailable: {err:?}"),
    }
}
