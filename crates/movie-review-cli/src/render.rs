//! Text rendering of browse results.
//!
//! Each movie becomes an [`Entry`]: a collapsed heading plus the lines shown
//! when it is expanded.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use movie_review_models::{Movie, Review};

pub const NO_REVIEWS: &str = "ℹ️  No reviews for this movie yet.";

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub heading: String,
    pub body: Vec<String>,
}

impl Entry {
    pub fn from_movie(movie: &Movie) -> Self {
        let image = movie
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or("N/A");

        let mut body = vec![
            format!("🖼️  Image: {}", image),
            format!("🆔 Movie Identifier: {}", movie.id),
            format!("🎬 Director: {}", movie.director),
            format!("📅 Year: {}", movie.release_year),
            format!("🎭 Genre: {}", movie.genre),
            format!("⭐ Average Rating: {}", movie.average_rating_label()),
            format!("💬 Sentiment: {}", movie.sentiment_label()),
            "---".to_string(),
        ];

        if movie.reviews.is_empty() {
            body.push(NO_REVIEWS.to_string());
        } else {
            for review in &movie.reviews {
                body.extend(review_lines(review));
            }
        }

        Self {
            heading: movie.heading(),
            body,
        }
    }

    /// Heading followed by the indented body
    pub fn expanded(&self) -> String {
        let mut text = format!("▾ {}", self.heading);
        for line in &self.body {
            text.push_str("\n    ");
            text.push_str(line);
        }
        text
    }
}

pub fn entries(movies: &[Movie]) -> Vec<Entry> {
    movies.iter().map(Entry::from_movie).collect()
}

fn review_lines(review: &Review) -> Vec<String> {
    let mut lines = vec![format!(
        "⭐ {} — *{}* — (Review Identifier {})",
        format_rating(review.rating),
        review.sentiment_label(),
        review.id
    )];
    if review.content.is_empty() {
        lines.push(">".to_string());
    } else {
        lines.extend(review.content.lines().map(|line| format!("> {}", line)));
    }
    lines
}

/// Whole ratings keep one decimal (`8.0`), others print as-is (`7.25`)
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

/// One row per movie, for `browse --compact`
pub fn summary_table(movies: &[Movie]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Title", "Year", "Director", "Genre", "Avg Rating", "Sentiment", "Reviews"]);

    for movie in movies {
        table.add_row(vec![
            movie.id.to_string(),
            movie.title.clone(),
            movie.release_year.to_string(),
            movie.director.clone(),
            movie.genre.clone(),
            movie.average_rating_label(),
            movie.sentiment_label().to_string(),
            movie.reviews.len().to_string(),
        ]);
    }
    table
}
