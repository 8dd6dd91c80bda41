use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::DEFAULT_API_URL;

/// Number of neighbours requested by a nearest neighbour search.
pub const NEAREST_LIMIT: u32 = 30;

const ARTWORKS_PATH: &str = "/ai/v1/artworks";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please enter a search query")]
    MissingQuery,
    #[error("Please enter an artwork ID")]
    MissingId,
    #[error("Please enter both artwork IDs")]
    MissingIds,
    #[error("Invalid search type: {0}")]
    InvalidSearchType(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Semantic,
    NearestNeighbor,
    Similarity,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [
        SearchMode::Semantic,
        SearchMode::NearestNeighbor,
        SearchMode::Similarity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Semantic => "semantic",
            SearchMode::NearestNeighbor => "nearest_neighbor",
            SearchMode::Similarity => "similarity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Semantic => "Semantic search",
            SearchMode::NearestNeighbor => "Nearest neighbors",
            SearchMode::Similarity => "Similarity",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semantic" => Ok(SearchMode::Semantic),
            "nearest_neighbor" => Ok(SearchMode::NearestNeighbor),
            "similarity" => Ok(SearchMode::Similarity),
            other => Err(QueryError::InvalidSearchType(other.to_string())),
        }
    }
}

/// A validated search. Each variant only carries the fields its mode needs,
/// already trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    Semantic { query: String },
    NearestNeighbor { id: String },
    Similarity { id: String, compare_id: String },
}

impl SearchRequest {
    pub fn mode(&self) -> SearchMode {
        match self {
            SearchRequest::Semantic { .. } => SearchMode::Semantic,
            SearchRequest::NearestNeighbor { .. } => SearchMode::NearestNeighbor,
            SearchRequest::Similarity { .. } => SearchMode::Similarity,
        }
    }

    /// Upstream path, relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            SearchRequest::Semantic { query } => {
                format!("{ARTWORKS_PATH}/search?q={}", encode(query))
            }
            SearchRequest::NearestNeighbor { id } => {
                format!("{ARTWORKS_PATH}/{}/nearest?limit={NEAREST_LIMIT}", encode(id))
            }
            SearchRequest::Similarity { id, compare_id } => format!(
                "{ARTWORKS_PATH}/{}/similarity/{}",
                encode(id),
                encode(compare_id)
            ),
        }
    }
}

/// Raw form state as typed by the user or restored from the address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub mode: String,
    pub query: String,
    pub id: String,
    pub compare_id: String,
    pub api_url: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            mode: SearchMode::default().as_str().to_string(),
            query: String::new(),
            id: String::new(),
            compare_id: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl SearchForm {
    pub fn to_request(&self) -> Result<SearchRequest, QueryError> {
        match self.mode.parse::<SearchMode>()? {
            SearchMode::Semantic => non_empty(&self.query)
                .map(|query| SearchRequest::Semantic { query })
                .ok_or(QueryError::MissingQuery),
            SearchMode::NearestNeighbor => non_empty(&self.id)
                .map(|id| SearchRequest::NearestNeighbor { id })
                .ok_or(QueryError::MissingId),
            SearchMode::Similarity => match (non_empty(&self.id), non_empty(&self.compare_id)) {
                (Some(id), Some(compare_id)) => Ok(SearchRequest::Similarity { id, compare_id }),
                _ => Err(QueryError::MissingIds),
            },
        }
    }

    /// Mode the selector shows. An unparsable mode shows as the default.
    pub fn selected_mode(&self) -> SearchMode {
        self.mode.parse().unwrap_or_default()
    }

    /// Base URL the request goes to: the trimmed input, or the default when
    /// blank. A single trailing slash is dropped.
    pub fn base_url(&self) -> String {
        let trimmed = self.api_url.trim();
        if trimmed.is_empty() {
            return DEFAULT_API_URL.to_string();
        }
        trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
    }

    /// Full upstream URL, shown for debugging before dispatch.
    pub fn resolved_url(&self, request: &SearchRequest) -> String {
        format!("{}{}", self.base_url(), request.path())
    }

    /// Whether the restored state is complete enough to search right away.
    pub fn can_auto_search(&self) -> bool {
        self.to_request().is_ok()
    }
}
