use serde::{Deserialize, Serialize};
use crate::review::Review;

/// A movie as returned by `GET /movies`
///
/// `average_rating` and `overall_sentiment` are aggregates the server recomputes
/// on every review mutation; the client only displays them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub release_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub overall_sentiment: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Movie {
    /// Collapsed heading, e.g. `Alien (1979)`
    pub fn heading(&self) -> String {
        format!("{} ({})", self.title, self.release_year)
    }

    /// Average rating with two decimals, or `N/A` when the server has none
    pub fn average_rating_label(&self) -> String {
        match self.average_rating {
            Some(rating) => format!("{:.2}", rating),
            None => "N/A".to_string(),
        }
    }

    pub fn sentiment_label(&self) -> &str {
        self.overall_sentiment.as_deref().unwrap_or("N/A")
    }
}
