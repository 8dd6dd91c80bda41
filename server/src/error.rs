use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use data::ErrorBody;
use log::{error, warn};
use serde_json::Value;

pub const GENERIC_FAILURE: &str = "Failed to fetch data from API";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API URL is required")]
    MissingApiUrl,
    #[error("Path is required")]
    MissingPath,
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    /// Upstream answered with a non-2xx status; relayed unchanged.
    #[error("upstream responded with {status}")]
    Upstream { status: StatusCode, body: Value },
    #[error("request to {target} failed: {source}")]
    Transport {
        target: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid JSON from {target}: {source}")]
    InvalidBody {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::MissingApiUrl
            | ProxyError::MissingPath
            | ProxyError::InvalidQuery(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(self.to_string()))).into_response()
            }
            ProxyError::Upstream { status, body } => {
                warn!("Upstream responded with {status}");
                (status, Json(body)).into_response()
            }
            ProxyError::Transport { .. } | ProxyError::InvalidBody { .. } => {
                error!("Proxy error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new(GENERIC_FAILURE)),
                )
                    .into_response()
            }
        }
    }
}
