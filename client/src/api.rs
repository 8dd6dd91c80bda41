use data::{upstream_error_message, ProxyParams, SearchResponse};
use gloo_net::http::Request;
use leptos::logging::{error, log};
use serde_json::Value;

/// Sends a search through the server proxy and decodes the answer into one
/// of the two known shapes. Every failure comes back as a display message.
pub async fn fetch_search(base_url: String, path: String) -> Result<SearchResponse, String> {
    let url = ProxyParams::new(base_url, path).proxy_url();
    log!("Fetching {url}");

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|err| {
            error!("Request failed: {err:?}");
            format!("Network error: {err}")
        })?;

    let status = response.status();
    let body = response.json::<Value>().await;

    if !response.ok() {
        return Err(match body {
            Ok(body) => upstream_error_message(status, &body),
            Err(_) => format!("Request failed with status {status}"),
        });
    }

    body.ok()
        .and_then(|body| serde_json::from_value::<SearchResponse>(body).ok())
        .ok_or_else(|| {
            error!("Failed to parse SearchResponse");
            "Unexpected response from API".to_string()
        })
}
