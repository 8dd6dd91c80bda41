use crate::error::ProxyError;
use crate::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::ACCEPT;
use axum::Json;
use data::ProxyParams;
use log::{debug, trace};
use serde_json::{json, Value};

fn required(value: Option<String>, missing: ProxyError) -> Result<String, ProxyError> {
    value.filter(|v| !v.is_empty()).ok_or(missing)
}

/// `GET /api/artwork?apiUrl=..&path=..`: forwards a GET to `apiUrl + path`
/// with the configured bearer token and relays the JSON answer.
pub async fn forward_artwork_request(
    State(state): State<AppState>,
    params: Result<Query<ProxyParams>, QueryRejection>,
) -> Result<Json<Value>, ProxyError> {
    let Query(params) =
        params.map_err(|rejection| ProxyError::InvalidQuery(rejection.body_text()))?;
    trace!("Proxy params: {:?}", params);
    let api_url = required(params.api_url, ProxyError::MissingApiUrl)?;
    let path = required(params.path, ProxyError::MissingPath)?;

    // The caller is responsible for a well-formed path.
    let target = format!("{api_url}{path}");
    debug!("Forwarding GET {target}");

    let mut request = state.client.get(&target).header(ACCEPT, "application/json");
    if let Some(token) = &state.arguments.api_token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|source| ProxyError::Transport {
        target: target.clone(),
        source,
    })?;
    let status = response.status();
    let bytes = response.bytes().await.map_err(|source| ProxyError::Transport {
        target: target.clone(),
        source,
    })?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(body) if status.is_success() => Ok(Json(body)),
        Ok(body) => Err(ProxyError::Upstream { status, body }),
        // A failing upstream that does not speak JSON keeps its status.
        Err(_) if !status.is_success() => Err(ProxyError::Upstream {
            status,
            body: json!({ "error": format!("Request failed with status {}", status.as_u16()) }),
        }),
        Err(source) => Err(ProxyError::InvalidBody { target, source }),
    }
}
