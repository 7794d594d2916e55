//! Domain DTOs for the collection API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Every field except `id` is optional because the API omits or nulls fields
//! freely; fallbacks are applied at render time, not here.

use serde::{Deserialize, Serialize};

/// One hit from the search endpoint. Only `id` and `title` are requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResultItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
}

/// A single artwork record from the detail endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtworkDetail {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_title: Option<String>,
    #[serde(default)]
    pub date_display: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub medium_display: Option<String>,
    #[serde(default)]
    pub credit_line: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
}

/// Search response body. A missing or null `data` means no hits.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub data: Option<Vec<SearchResultItem>>,
}

/// Detail response body.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailEnvelope {
    #[serde(default)]
    pub data: Option<ArtworkDetail>,
}

/// Treat `Some("")` like `None`; the API sends both for "unknown".
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
