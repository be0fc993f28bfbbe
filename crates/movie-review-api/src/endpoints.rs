//! URL construction for the movie review service.
//! Titles come from free text and are percent-encoded as path segments.

use urlencoding::encode;

pub fn list_movies(base_url: &str) -> String {
    format!("{}/movies", base_url)
}

pub fn create_movie(base_url: &str) -> String {
    format!("{}/movies/create_movie", base_url)
}

pub fn update_movie(base_url: &str, movie_id: i64) -> String {
    format!("{}/movies/update_movie/{}", base_url, movie_id)
}

pub fn delete_movie(base_url: &str, title: &str) -> String {
    format!("{}/movies/delete_movie/{}", base_url, encode(title))
}

pub fn create_review(base_url: &str, title: &str) -> String {
    format!("{}/movies/create_review/{}", base_url, encode(title))
}

pub fn update_review(base_url: &str, title: &str, review_id: i64) -> String {
    format!("{}/movies/update_review/{}/{}", base_url, encode(title), review_id)
}

pub fn delete_review(base_url: &str, title: &str, review_id: i64) -> String {
    format!("{}/movies/delete_review/{}/{}", base_url, encode(title), review_id)
}
