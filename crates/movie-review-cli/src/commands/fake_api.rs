//! In-memory stand-in for the movie review service.
//!
//! Records every call and keeps a tiny movie store whose aggregates are
//! recomputed on review changes, the way the real service does.

use async_trait::async_trait;
use movie_review_api::{ApiError, MovieApi, Result};
use movie_review_models::{Movie, MovieChanges, MovieQuery, NewMovie, NewReview, Review, ReviewChanges};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<String>>,
    movies: Mutex<Vec<Movie>>,
    failure: Option<(u16, Option<String>)>,
    malformed: Mutex<bool>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(status: u16, detail: Option<&str>) -> Self {
        Self {
            failure: Some((status, detail.map(str::to_string))),
            ..Self::default()
        }
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Mutex::new(movies),
            ..Self::default()
        }
    }

    pub fn set_malformed_response(&self) {
        *self.malformed.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if let Some((status, detail)) = &self.failure {
            return Err(ApiError::Status {
                status: *status,
                detail: detail.clone(),
            });
        }
        if *self.malformed.lock().unwrap() {
            return Err(serde_json::from_str::<Value>("{").unwrap_err().into());
        }
        Ok(())
    }

    fn with_movie<T>(&self, title: &str, f: impl FnOnce(&mut Movie) -> T) -> Result<T> {
        let mut movies = self.movies.lock().unwrap();
        let movie = movies
            .iter_mut()
            .find(|m| m.title == title)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                detail: Some("Movie not found".to_string()),
            })?;
        let result = f(movie);
        recompute_aggregates(movie);
        Ok(result)
    }
}

fn recompute_aggregates(movie: &mut Movie) {
    if movie.reviews.is_empty() {
        movie.average_rating = None;
        movie.overall_sentiment = None;
        return;
    }
    let total: f64 = movie.reviews.iter().map(|r| r.rating).sum();
    movie.average_rating = Some(total / movie.reviews.len() as f64);

    // Most frequent review sentiment; ties go to the earliest label seen
    let mut counts: Vec<(String, usize)> = Vec::new();
    for sentiment in movie.reviews.iter().filter_map(|r| r.sentiment.clone()) {
        match counts.iter_mut().find(|(label, _)| *label == sentiment) {
            Some((_, n)) => *n += 1,
            None => counts.push((sentiment, 1)),
        }
    }
    let mut overall: Option<(String, usize)> = None;
    for (label, n) in counts {
        if overall.as_ref().map_or(true, |(_, best)| n > *best) {
            overall = Some((label, n));
        }
    }
    movie.overall_sentiment = overall.map(|(label, _)| label);
}

pub fn sample_movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        director: "Director".to_string(),
        genre: "Drama".to_string(),
        release_year: 2000,
        image_url: None,
        average_rating: None,
        overall_sentiment: None,
        reviews: Vec::new(),
    }
}

#[async_trait]
impl MovieApi for FakeApi {
    async fn create_movie(&self, movie: &NewMovie) -> Result<()> {
        self.record(format!("create_movie {}", movie.title))?;
        let mut movies = self.movies.lock().unwrap();
        let id = movies.len() as i64 + 1;
        let mut created = sample_movie(id, &movie.title);
        created.release_year = movie.release_year;
        movies.push(created);
        Ok(())
    }

    async fn update_movie(&self, movie_id: i64, changes: &MovieChanges) -> Result<()> {
        self.record(format!("update_movie {} {}", movie_id, Value::Object(changes.to_payload())))
    }

    async fn delete_movie(&self, title: &str) -> Result<String> {
        self.record(format!("delete_movie {}", title))?;
        self.movies.lock().unwrap().retain(|m| m.title != title);
        Ok(format!("Movie '{}' deleted", title))
    }

    async fn create_review(&self, title: &str, review: &NewReview) -> Result<()> {
        self.record(format!(
            "create_review {} movie_id={} rating={}",
            title, review.movie_id, review.rating
        ))?;
        self.with_movie(title, |movie| {
            let id = movie.reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            movie.reviews.push(Review {
                id,
                movie_id: Some(review.movie_id),
                content: review.content.clone(),
                rating: review.rating,
                sentiment: Some("neutral".to_string()),
            });
        })
    }

    async fn update_review(&self, title: &str, review_id: i64, changes: &ReviewChanges) -> Result<()> {
        self.record(format!(
            "update_review {} {} {}",
            title,
            review_id,
            Value::Object(changes.to_payload())
        ))
    }

    async fn delete_review(&self, title: &str, review_id: i64) -> Result<()> {
        self.record(format!("delete_review {} {}", title, review_id))?;
        self.with_movie(title, |movie| movie.reviews.retain(|r| r.id != review_id))
    }

    async fn list_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>> {
        let params: Vec<String> = query
            .query_params()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        self.record(format!("list_movies {}", params.join("&")).trim_end().to_string())?;
        Ok(self.movies.lock().unwrap().clone())
    }
}
