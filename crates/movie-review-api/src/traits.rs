use async_trait::async_trait;
use movie_review_models::{Movie, MovieChanges, MovieQuery, NewMovie, NewReview, ReviewChanges};
use crate::error::Result;

/// The seven calls the form client makes against the movie review service.
///
/// Every call is a single round trip: `Ok` means the server answered 200.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn create_movie(&self, movie: &NewMovie) -> Result<()>;
    async fn update_movie(&self, movie_id: i64, changes: &MovieChanges) -> Result<()>;

    /// Movies are deleted by title; returns the server's `Message`
    async fn delete_movie(&self, title: &str) -> Result<String>;

    async fn create_review(&self, title: &str, review: &NewReview) -> Result<()>;
    async fn update_review(&self, title: &str, review_id: i64, changes: &ReviewChanges) -> Result<()>;
    async fn delete_review(&self, title: &str, review_id: i64) -> Result<()>;

    async fn list_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>>;
}
