pub mod movie;
pub mod payload;
pub mod review;
pub mod sentiment;

pub use movie::Movie;
pub use payload::{MovieChanges, MovieFilter, MovieQuery, NewMovie, NewReview, ReviewChanges, retain_truthy, round_rating};
pub use review::Review;
pub use sentiment::Sentiment;

/// Earliest release year accepted by the movie forms
pub const MIN_RELEASE_YEAR: i32 = 1886;
/// Latest release year accepted by the movie forms
pub const MAX_RELEASE_YEAR: i32 = 2026;
/// Upper bound of the review rating scale (lower bound is 0)
pub const MAX_RATING: f64 = 10.0;
