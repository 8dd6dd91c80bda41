use crate::server_arguments::ServerArguments;
use axum::routing::get;
use axum::Router;
use data::PROXY_ROUTE;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

pub mod error;
pub mod proxy;
pub mod server_arguments;

#[derive(Clone)]
pub struct AppState {
    pub arguments: ServerArguments,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(arguments: ServerArguments) -> Self {
        Self::with_client(arguments, reqwest::Client::new())
    }

    pub fn with_client(arguments: ServerArguments, client: reqwest::Client) -> Self {
        Self { arguments, client }
    }
}

/// Proxy route plus the built client, with `index.html` as fallback.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    Router::new()
        .route(PROXY_ROUTE, get(proxy::forward_artwork_request))
        .with_state(state)
        .fallback_service(
            ServeDir::new(static_dir).not_found_service(ServeFile::new(static_dir.join("index.html"))),
        )
}
