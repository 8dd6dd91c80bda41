use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An id as the API sends it, either a number or a string. Non-integer
/// numbers are kept as their text.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(n
                .as_i64()
                .map(Identifier::Number)
                .unwrap_or_else(|| Identifier::Text(n.to_string()))),
            Value::String(s) => Ok(Identifier::Text(s)),
            other => Err(D::Error::custom(format!("invalid identifier: {other}"))),
        }
    }
}

/// Field decoder that turns a mistyped value into the default instead of
/// failing the whole payload.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decimal sent either as a string or as a JSON number.
fn decimal_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{n}"),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ArtworkData {
    #[serde(default, deserialize_with = "or_default")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub image_url: Option<String>,
}

/// One hit. Every field is optional and a mistyped field only blanks
/// itself, so a single odd item never rejects the page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ArtworkResult {
    #[serde(default, deserialize_with = "or_default")]
    pub id: Option<Identifier>,
    #[serde(default, deserialize_with = "or_default")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub model_name: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub model_id: Option<Identifier>,
    #[serde(default, deserialize_with = "or_default")]
    pub data: Option<ArtworkData>,
    /// Decimal string, kept as sent.
    #[serde(default, deserialize_with = "decimal_text")]
    pub distance: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub embedding_type: Option<String>,
    #[serde(default)]
    pub vision_analysis: Option<Value>,
}

impl ArtworkResult {
    pub fn image_url(&self) -> Option<&str> {
        self.data.as_ref()?.image_url.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.as_ref()?.description.as_deref()
    }

    pub fn id_label(&self) -> String {
        self.id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SimilarityResult {
    #[serde(default, deserialize_with = "or_default")]
    pub embedding_type: Option<String>,
    pub similarity_score: f64,
    /// The two compared artworks.
    #[serde(default, deserialize_with = "or_default")]
    pub artwork_ids: Vec<Identifier>,
}

impl SimilarityResult {
    pub fn pair_label(&self) -> String {
        self.artwork_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ↔ ")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItemsPage {
    #[serde(default, deserialize_with = "or_default")]
    pub count: Option<u64>,
    pub items: Vec<ArtworkResult>,
    #[serde(default, deserialize_with = "or_default")]
    pub total: Option<u64>,
}

impl ItemsPage {
    /// Items paired with their position. The same artwork can come back once
    /// per embedding type, so the id alone does not identify a row.
    pub fn keyed_items(&self) -> Vec<(usize, ArtworkResult)> {
        self.items.iter().cloned().enumerate().collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScoresPage {
    pub similarity_scores: Vec<SimilarityResult>,
}

/// The two payload shapes the API answers with. The wire format carries no
/// tag: a body with `items` is a list, otherwise one with
/// `similarity_scores` is a score list.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum SearchResponse {
    Items(ItemsPage),
    Scores(ScoresPage),
}

impl<'de> Deserialize<'de> for SearchResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.get("items").is_some() {
            ItemsPage::deserialize(value)
                .map(SearchResponse::Items)
                .map_err(D::Error::custom)
        } else if value.get("similarity_scores").is_some() {
            ScoresPage::deserialize(value)
                .map(SearchResponse::Scores)
                .map_err(D::Error::custom)
        } else {
            Err(D::Error::custom(
                "expected an `items` or `similarity_scores` payload",
            ))
        }
    }
}

/// Message to show for a failed upstream call: the body's `error` field,
/// then `detail`, then a generic one naming the status.
pub fn upstream_error_message(status: u16, body: &Value) -> String {
    ["error", "detail"]
        .iter()
        .find_map(|key| match body.get(key)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn items_payload_is_a_list() {
        let body = json!({
            "count": 1,
            "total": 120,
            "items": [{
                "id": 129884,
                "created_at": "2024-05-01T10:00:00Z",
                "updated_at": "2024-05-01T10:00:00Z",
                "model_name": "clip-vit-large",
                "model_id": 3,
                "data": {
                    "description": "Starry night over the harbor",
                    "generated_at": "2024-05-01T09:59:00Z",
                    "image_url": "https://www.artic.edu/iiif/2/abc/full/843,/0/default.jpg"
                },
                "distance": "0.1834",
                "embedding_type": "image",
                "vision_analysis": {"objects": ["boat", "moon"]}
            }]
        });
        let SearchResponse::Items(page) = serde_json::from_value(body).unwrap() else {
            panic!("expected items");
        };
        assert_eq!(page.total, Some(120));
        let item = &page.items[0];
        assert_eq!(item.id, Some(Identifier::Number(129884)));
        assert_eq!(item.description(), Some("Starry night over the harbor"));
        assert_eq!(item.distance.as_deref(), Some("0.1834"));
        assert!(item.vision_analysis.is_some());
    }

    #[test]
    fn sparse_items_still_decode() {
        let body = json!({"items": [{"id": "abc"}]});
        let SearchResponse::Items(page) = serde_json::from_value(body).unwrap() else {
            panic!("expected items");
        };
        assert_eq!(page.count, None);
        assert_eq!(page.items[0].image_url(), None);
    }

    #[test]
    fn scores_payload_is_a_score_list() {
        let body = json!({
            "similarity_scores": [
                {"embedding_type": "text", "similarity_score": 0.87, "artwork_ids": [1, 2]},
                {"embedding_type": "image", "similarity_score": 0.42, "artwork_ids": [1, 2]}
            ]
        });
        let SearchResponse::Scores(page) = serde_json::from_value(body).unwrap() else {
            panic!("expected scores");
        };
        assert_eq!(page.similarity_scores.len(), 2);
        assert_eq!(page.similarity_scores[0].pair_label(), "1 ↔ 2");
    }

    #[test]
    fn other_shapes_are_rejected() {
        assert!(serde_json::from_value::<SearchResponse>(json!({"data": []})).is_err());
        assert!(serde_json::from_value::<SearchResponse>(json!([1, 2])).is_err());
    }

    #[test]
    fn error_message_prefers_error_then_detail() {
        let both = json!({"error": "Artwork not found", "detail": "no row"});
        assert_eq!(upstream_error_message(404, &both), "Artwork not found");

        let detail = json!({"detail": "Not authenticated"});
        assert_eq!(upstream_error_message(401, &detail), "Not authenticated");

        let structured = json!({"detail": [{"msg": "field required"}]});
        assert_eq!(
            upstream_error_message(422, &structured),
            r#"[{"msg":"field required"}]"#
        );

        assert_eq!(
            upstream_error_message(502, &json!({})),
            "Request failed with status 502"
        );
    }

    #[test]
    fn odd_item_fields_do_not_reject_the_page() {
        let body = json!({
            "count": 3,
            "items": [
                {"id": 1, "distance": "0.1"},
                {"id": 2, "distance": 0.25, "model_id": 1.5},
                {"distance": "0.3", "id": null, "data": "not an object"}
            ]
        });
        let SearchResponse::Items(page) = serde_json::from_value(body).unwrap() else {
            panic!("expected items");
        };
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[1].distance.as_deref(), Some("0.25"));
        assert_eq!(page.items[1].model_id, Some(Identifier::Text("1.5".to_string())));
        assert_eq!(page.items[2].id, None);
        assert_eq!(page.items[2].id_label(), "?");
        assert_eq!(page.items[2].data, None);
    }

    #[test]
    fn items_key_decides_the_shape() {
        let body = json!({
            "items": [{"id": "x", "embedding_type": 7}],
            "similarity_scores": [{"similarity_score": 0.5}]
        });
        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(response, SearchResponse::Items(_)));

        let broken_items = json!({
            "items": "nope",
            "similarity_scores": [{"similarity_score": 0.5}]
        });
        assert!(serde_json::from_value::<SearchResponse>(broken_items).is_err());
    }

    #[test]
    fn duplicate_ids_get_distinct_keys() {
        let body = json!({
            "items": [
                {"id": 1, "embedding_type": "image"},
                {"id": 1, "embedding_type": "text"}
            ]
        });
        let SearchResponse::Items(page) = serde_json::from_value(body).unwrap() else {
            panic!("expected items");
        };
        let keyed = page.keyed_items();
        assert_eq!(keyed.len(), 2);
        assert_eq!(keyed[0].1.id, keyed[1].1.id);
        assert_ne!(keyed[0].0, keyed[1].0);
        assert_eq!(keyed[1].1.embedding_type.as_deref(), Some("text"));
    }
}
