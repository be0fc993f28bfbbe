//! Request payloads built from the client forms.
//!
//! Create forms send every field. Update forms build the full candidate
//! mapping and then keep only the truthy entries, so an untouched optional
//! field never reaches the server.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::sentiment::Sentiment;

/// Body of `POST /movies/create_movie`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub genre: String,
    pub release_year: i32,
    #[serde(default)]
    pub image_url: String,
}

/// Candidate fields of `PUT /movies/update_movie/{movie_id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub image_url: Option<String>,
}

impl MovieChanges {
    pub fn to_payload(&self) -> Map<String, Value> {
        let mut candidate = Map::new();
        candidate.insert("title".to_string(), Value::from(self.title.clone()));
        candidate.insert("director".to_string(), Value::from(self.director.clone()));
        candidate.insert("genre".to_string(), Value::from(self.genre.clone()));
        candidate.insert("release_year".to_string(), Value::from(self.release_year));
        candidate.insert("image_url".to_string(), Value::from(self.image_url.clone()));
        retain_truthy(candidate)
    }
}

/// Body of `POST /movies/create_review/{title}`
///
/// `movie_id` is sent as given; it is not checked against the title in the URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    pub movie_id: i64,
    pub content: String,
    pub rating: f64,
}

/// Candidate fields of `PUT /movies/update_review/{title}/{review_id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewChanges {
    pub content: Option<String>,
    pub rating: Option<f64>,
}

impl ReviewChanges {
    pub fn to_payload(&self) -> Map<String, Value> {
        let mut candidate = Map::new();
        candidate.insert("content".to_string(), Value::from(self.content.clone()));
        candidate.insert("rating".to_string(), Value::from(self.rating));
        retain_truthy(candidate)
    }
}

/// Drop every entry that is null, an empty string, zero, `false`, or an empty collection.
pub fn retain_truthy(mut map: Map<String, Value>) -> Map<String, Value> {
    map.retain(|_, value| is_truthy(value));
    map
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Filter fields of the browse form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub min_rating: Option<f64>,
    pub sentiment: Option<Sentiment>,
}

impl MovieFilter {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let text_fields = [
            ("title", &self.title),
            ("director", &self.director),
            ("genre", &self.genre),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
                params.push((key, value.clone()));
            }
        }
        if let Some(year) = self.release_year {
            params.push(("release_year", year.to_string()));
        }
        if let Some(min_rating) = self.min_rating.filter(|r| *r > 0.0) {
            params.push(("min_rating", min_rating.to_string()));
        }
        if let Some(sentiment) = self.sentiment {
            params.push(("sentiment", sentiment.as_str().to_string()));
        }
        params
    }

    pub fn is_empty(&self) -> bool {
        self.query_params().is_empty()
    }
}

/// What the browse view asks for
#[derive(Debug, Clone, PartialEq)]
pub enum MovieQuery {
    /// "Show all": every filter field is ignored
    All,
    Filtered(MovieFilter),
}

impl MovieQuery {
    pub fn new(show_all: bool, filter: MovieFilter) -> Self {
        if show_all {
            MovieQuery::All
        } else {
            MovieQuery::Filtered(filter)
        }
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            MovieQuery::All => Vec::new(),
            MovieQuery::Filtered(filter) => filter.query_params(),
        }
    }
}

/// Round a rating to the 0.1 step the rating widgets use
pub fn round_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}
