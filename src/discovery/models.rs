//! Google Custom Search JSON API response shapes.

use serde::{Deserialize, Serialize};

/// Top-level search response. Google omits `items` when nothing matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// A single search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}
