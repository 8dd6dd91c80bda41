//! Address-bar encoding of a search so it can be shared and restored.

use serde::{Deserialize, Serialize};

use crate::query::{non_empty, SearchForm, SearchMode};
use crate::DEFAULT_API_URL;

#[derive(Debug, Serialize, Deserialize, Default)]
struct ShareParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "compareId", skip_serializing_if = "Option::is_none")]
    compare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api: Option<String>,
}

impl SearchForm {
    /// Query string (without `?`) holding the parameters relevant to the
    /// current mode. `api` is only written when it differs from the default.
    pub fn share_query(&self) -> String {
        let mut params = ShareParams {
            mode: Some(self.mode.clone()),
            ..ShareParams::default()
        };
        match self.mode.parse::<SearchMode>() {
            Ok(SearchMode::Semantic) => params.q = non_empty(&self.query),
            Ok(SearchMode::NearestNeighbor) => params.id = non_empty(&self.id),
            Ok(SearchMode::Similarity) => {
                params.id = non_empty(&self.id);
                params.compare_id = non_empty(&self.compare_id);
            }
            Err(_) => {}
        }
        let base_url = self.base_url();
        if base_url != DEFAULT_API_URL {
            params.api = Some(base_url);
        }
        serde_urlencoded::to_string(&params).unwrap_or_default()
    }

    /// Restores a form from `location.search`. Unknown or missing `type`
    /// falls back to semantic search; a malformed string yields the default
    /// form.
    pub fn from_share_query(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let params: ShareParams = serde_urlencoded::from_str(search).unwrap_or_default();
        let mode = params
            .mode
            .as_deref()
            .and_then(|m| m.parse::<SearchMode>().ok())
            .unwrap_or_default();
        SearchForm {
            mode: mode.as_str().to_string(),
            query: params.q.unwrap_or_default(),
            id: params.id.unwrap_or_default(),
            compare_id: params.compare_id.unwrap_or_default(),
            api_url: params.api.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_query_only_writes_fields_of_the_mode() {
        let form = SearchForm {
            mode: "nearest_neighbor".to_string(),
            query: "cats".to_string(),
            id: "129884".to_string(),
            compare_id: "5".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        };
        assert_eq!(form.share_query(), "type=nearest_neighbor&id=129884");
    }

    #[test]
    fn share_query_includes_custom_api() {
        let form = SearchForm {
            mode: "similarity".to_string(),
            id: "1".to_string(),
            compare_id: "2".to_string(),
            api_url: "http://localhost:8000".to_string(),
            ..SearchForm::default()
        };
        assert_eq!(
            form.share_query(),
            "type=similarity&id=1&compareId=2&api=http%3A%2F%2Flocalhost%3A8000"
        );
    }

    #[test]
    fn restores_and_auto_searches() {
        let form = SearchForm::from_share_query("?type=semantic&q=water+lilies");
        assert_eq!(form.query, "water lilies");
        assert_eq!(form.api_url, DEFAULT_API_URL);
        assert!(form.can_auto_search());
        assert_eq!(
            form.to_request().unwrap().path(),
            "/ai/v1/artworks/search?q=water%20lilies"
        );

        let form = SearchForm::from_share_query("type=similarity&id=1");
        assert_eq!(form.mode, "similarity");
        assert!(!form.can_auto_search());
    }

    #[test]
    fn unknown_type_restores_default_mode() {
        let form = SearchForm::from_share_query("type=bogus&id=3&api=http%3A%2F%2Fexample.org");
        assert_eq!(form.mode, "semantic");
        assert_eq!(form.id, "3");
        assert_eq!(form.api_url, "http://example.org");
        assert!(!form.can_auto_search());

        assert_eq!(SearchForm::from_share_query(""), SearchForm::default());
    }

    #[test]
    fn share_round_trip() {
        let form = SearchForm {
            mode: "semantic".to_string(),
            query: "a cat, sleeping".to_string(),
            ..SearchForm::default()
        };
        assert_eq!(SearchForm::from_share_query(&form.share_query()), form);
    }
}
