use serde::{Deserialize, Serialize};

/// A review nested inside a [`crate::Movie`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<i64>,
    pub content: String,
    pub rating: f64,
    // Assigned by the server from the content
    #[serde(default)]
    pub sentiment: Option<String>,
}

impl Review {
    pub fn sentiment_label(&self) -> &str {
        self.sentiment.as_deref().unwrap_or("N/A")
    }
}
