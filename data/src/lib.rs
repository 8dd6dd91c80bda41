use serde::{Deserialize, Serialize};

mod query;
mod response;
mod share;

pub use query::{QueryError, SearchForm, SearchMode, SearchRequest, NEAREST_LIMIT};
pub use response::{
    upstream_error_message, ArtworkData, ArtworkResult, Identifier, ItemsPage, ScoresPage,
    SearchResponse, SimilarityResult,
};

pub const DEFAULT_API_URL: &str = "https://api-test.artic.edu";

/// Route of the proxy on the server.
pub const PROXY_ROUTE: &str = "/api/artwork";

/// Query parameters of the proxy route.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ProxyParams {
    #[serde(rename = "apiUrl", default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ProxyParams {
    pub fn new(api_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            api_url: Some(api_url.into()),
            path: Some(path.into()),
        }
    }

    /// Proxy URL relative to the page origin.
    pub fn proxy_url(&self) -> String {
        format!(
            "{PROXY_ROUTE}?{}",
            serde_urlencoded::to_string(self).unwrap_or_default()
        )
    }
}

/// Error payload produced by the proxy itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Lifecycle of one search as seen by the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(SearchResponse),
    Failed(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_url_encodes_both_parameters() {
        let params = ProxyParams::new(DEFAULT_API_URL, "/ai/v1/artworks/search?q=cats");
        assert_eq!(
            params.proxy_url(),
            "/api/artwork?apiUrl=https%3A%2F%2Fapi-test.artic.edu&path=%2Fai%2Fv1%2Fartworks%2Fsearch%3Fq%3Dcats"
        );
    }

    #[test]
    fn proxy_params_missing_fields_decode_as_none() {
        let params: ProxyParams = serde_urlencoded::from_str("path=%2Fx").unwrap();
        assert_eq!(params.api_url, None);
        assert_eq!(params.path.as_deref(), Some("/x"));
    }

    #[test]
    fn search_state_helpers() {
        assert!(SearchState::Loading.is_loading());
        assert_eq!(SearchState::Failed("boom".into()).error(), Some("boom"));
        assert_eq!(SearchState::Idle.error(), None);
    }
}
