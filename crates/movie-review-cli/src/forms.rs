//! Field constraints shared by command-line flags and interactive prompts.

use movie_review_models::{round_rating, Sentiment, MAX_RATING, MAX_RELEASE_YEAR, MIN_RELEASE_YEAR};

pub fn parse_release_year(s: &str) -> Result<i32, String> {
    let year: i32 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid release year: {}", s))?;
    if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        return Err(format!(
            "Release year must be between {} and {}",
            MIN_RELEASE_YEAR, MAX_RELEASE_YEAR
        ));
    }
    Ok(year)
}

/// Ratings are 0.0 to 10.0 in steps of 0.1
pub fn parse_rating(s: &str) -> Result<f64, String> {
    let rating: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid rating: {}", s))?;
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(format!("Rating must be between 0 and {}", MAX_RATING));
    }
    Ok(round_rating(rating))
}

/// The minimum-rating filter moves in steps of 0.5
pub fn parse_min_rating(s: &str) -> Result<f64, String> {
    let rating = parse_rating(s)?;
    Ok((rating * 2.0).round() / 2.0)
}

pub fn parse_identifier(s: &str) -> Result<i64, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("Invalid identifier: {} (expected a whole number)", s))
}

pub fn parse_sentiment(s: &str) -> Result<Sentiment, String> {
    Sentiment::from_str(s)
}

/// Only an empty field counts as "not given"; whitespace is sent as typed
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
