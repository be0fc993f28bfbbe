use crate::endpoints;
use crate::error::{ApiError, Result};
use crate::traits::MovieApi;
use async_trait::async_trait;
use movie_review_models::{Movie, MovieChanges, MovieQuery, NewMovie, NewReview, ReviewChanges};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// Body of a successful `DELETE /movies/delete_movie/{title}`
#[derive(Debug, Deserialize)]
struct DeleteMovieResponse {
    #[serde(rename = "Message")]
    message: String,
}

/// `reqwest`-backed client for the movie review service
#[derive(Clone)]
pub struct HttpMovieApi {
    client: Client,
    base_url: String,
}

impl HttpMovieApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("movie-review/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Send one request and return the body of a 200 response
    async fn execute(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(method = %method, url = %url, "Sending request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(method = %method, url = %url, status = status.as_u16(), bytes = body.len(), "Received response");

        check_status(status, &body)?;
        Ok(body.to_vec())
    }
}

fn check_status(status: StatusCode, body: &[u8]) -> Result<()> {
    if status == StatusCode::OK {
        return Ok(());
    }

    let detail = error_detail(body);
    debug!(status = status.as_u16(), detail = ?detail, "Request rejected by server");
    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

/// Pull `detail` out of an error body. Validation errors carry a list there,
/// which is kept as compact JSON.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn create_movie(&self, movie: &NewMovie) -> Result<()> {
        let url = endpoints::create_movie(&self.base_url);
        self.execute(self.client.post(url).json(movie)).await?;
        info!(title = %movie.title, "Movie created");
        Ok(())
    }

    async fn update_movie(&self, movie_id: i64, changes: &MovieChanges) -> Result<()> {
        let url = endpoints::update_movie(&self.base_url, movie_id);
        let payload = changes.to_payload();
        let fields: Vec<&String> = payload.keys().collect();
        debug!(movie_id = movie_id, fields = ?fields, "Updating movie");
        self.execute(self.client.put(url).json(&payload)).await?;
        info!(movie_id = movie_id, "Movie updated");
        Ok(())
    }

    async fn delete_movie(&self, title: &str) -> Result<String> {
        let url = endpoints::delete_movie(&self.base_url, title);
        let body = self.execute(self.client.delete(url)).await?;
        let response: DeleteMovieResponse = serde_json::from_slice(&body)?;
        info!(title = %title, "Movie deleted");
        Ok(response.message)
    }

    async fn create_review(&self, title: &str, review: &NewReview) -> Result<()> {
        let url = endpoints::create_review(&self.base_url, title);
        self.execute(self.client.post(url).json(review)).await?;
        info!(title = %title, movie_id = review.movie_id, "Review created");
        Ok(())
    }

    async fn update_review(&self, title: &str, review_id: i64, changes: &ReviewChanges) -> Result<()> {
        let url = endpoints::update_review(&self.base_url, title, review_id);
        let payload = changes.to_payload();
        let fields: Vec<&String> = payload.keys().collect();
        debug!(review_id = review_id, fields = ?fields, "Updating review");
        self.execute(self.client.put(url).json(&payload)).await?;
        info!(title = %title, review_id = review_id, "Review updated");
        Ok(())
    }

    async fn delete_review(&self, title: &str, review_id: i64) -> Result<()> {
        let url = endpoints::delete_review(&self.base_url, title, review_id);
        self.execute(self.client.delete(url)).await?;
        info!(title = %title, review_id = review_id, "Review deleted");
        Ok(())
    }

    async fn list_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>> {
        let url = endpoints::list_movies(&self.base_url);
        let params = query.query_params();
        let mut request = self.client.get(url);
        if !params.is_empty() {
            request = request.query(&params);
        }

        let body = self.execute(request).await?;
        let movies: Vec<Movie> = serde_json::from_slice(&body)?;
        debug!(count = movies.len(), "Fetched movies");
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_review_models::{MovieFilter, Sentiment};
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one connection, answer with a canned response and hand back the raw request
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if let Some(end) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&raw[..end]).to_lowercase();
                    let length = headers
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .map(|v| v.trim().parse::<usize>().unwrap())
                        .unwrap_or(0);
                    if raw.len() >= end + 4 + length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8(raw).unwrap()
        });

        (base_url, handle)
    }

    fn request_line(raw: &str) -> &str {
        raw.lines().next().unwrap_or_default()
    }

    fn request_body(raw: &str) -> Value {
        let body = raw.split("\r\n\r\n").nth(1).unwrap_or_default();
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_error_detail_variants() {
        assert_eq!(error_detail(br#"{"detail": "not found"}"#), Some("not found".to_string()));
        assert_eq!(error_detail(br#"{"detail": null}"#), None);
        assert_eq!(error_detail(br#"{"message": "nope"}"#), None);
        assert_eq!(error_detail(b"<html>Bad Gateway</html>"), None);
        assert_eq!(
            error_detail(br#"{"detail": [{"loc": ["body", "rating"]}]}"#),
            Some(r#"[{"loc":["body","rating"]}]"#.to_string())
        );
    }

    #[test]
    fn test_check_status_only_accepts_200() {
        assert!(check_status(StatusCode::OK, b"").is_ok());

        let err = check_status(StatusCode::CREATED, b"{}").unwrap_err();
        assert_eq!(err.status(), Some(201));

        let err = check_status(StatusCode::NOT_FOUND, br#"{"detail": "not found"}"#).unwrap_err();
        assert_eq!(err.label(), "404");
        assert_eq!(err.detail(), "not found");
    }

    #[tokio::test]
    async fn test_update_movie_sends_only_changed_fields() {
        let (base_url, server) = serve_once("200 OK", "{}").await;
        let api = HttpMovieApi::new(base_url).unwrap();

        let changes = MovieChanges {
            title: Some("Blade Runner".to_string()),
            director: Some(String::new()),
            release_year: Some(1982),
            ..MovieChanges::default()
        };
        api.update_movie(5, &changes).await.unwrap();

        let raw = server.await.unwrap();
        assert!(request_line(&raw).starts_with("PUT /movies/update_movie/5 "));
        assert_eq!(request_body(&raw), json!({"title": "Blade Runner", "release_year": 1982}));
    }

    #[tokio::test]
    async fn test_create_review_posts_to_title() {
        let (base_url, server) = serve_once("200 OK", r#"{"id": 1}"#).await;
        let api = HttpMovieApi::new(format!("{}/", base_url)).unwrap();

        let review = NewReview {
            movie_id: 9,
            content: "Tense".to_string(),
            rating: 8.5,
        };
        api.create_review("The Thing", &review).await.unwrap();

        let raw = server.await.unwrap();
        assert!(request_line(&raw).starts_with("POST /movies/create_review/The%20Thing "));
        assert_eq!(request_body(&raw), json!({"movie_id": 9, "content": "Tense", "rating": 8.5}));
    }

    #[tokio::test]
    async fn test_delete_movie_returns_server_message() {
        let (base_url, server) = serve_once("200 OK", r#"{"Message": "Movie 'Alien' deleted."}"#).await;
        let api = HttpMovieApi::new(base_url).unwrap();

        let message = api.delete_movie("Alien").await.unwrap();
        assert_eq!(message, "Movie 'Alien' deleted.");

        let raw = server.await.unwrap();
        assert!(request_line(&raw).starts_with("DELETE /movies/delete_movie/Alien "));
    }

    #[tokio::test]
    async fn test_delete_review_not_found() {
        let (base_url, server) = serve_once("404 Not Found", r#"{"detail": "not found"}"#).await;
        let api = HttpMovieApi::new(base_url).unwrap();

        let err = api.delete_review("Heat", 3).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.detail(), "not found");

        let raw = server.await.unwrap();
        assert!(request_line(&raw).starts_with("DELETE /movies/delete_review/Heat/3 "));
    }

    #[tokio::test]
    async fn test_list_movies_with_filters() {
        let body = r#"[
            {"id": 1, "title": "Heat", "director": "Michael Mann", "genre": "Crime",
             "release_year": 1995, "average_rating": 8.25, "overall_sentiment": "positive",
             "reviews": [{"id": 4, "movie_id": 1, "content": "Great", "rating": 8.25, "sentiment": "positive"}]},
            {"id": 2, "title": "Thief", "director": "Michael Mann", "genre": "Crime", "release_year": 1981}
        ]"#;
        let (base_url, server) = serve_once("200 OK", body).await;
        let api = HttpMovieApi::new(base_url).unwrap();

        let query = MovieQuery::Filtered(MovieFilter {
            genre: Some("Crime".to_string()),
            min_rating: Some(0.0),
            sentiment: Some(Sentiment::Positive),
            ..MovieFilter::default()
        });
        let movies = api.list_movies(&query).await.unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].reviews.len(), 1);
        assert!(movies[1].average_rating.is_none());

        let raw = server.await.unwrap();
        assert!(request_line(&raw).starts_with("GET /movies?genre=Crime&sentiment=positive "));
    }

    #[tokio::test]
    async fn test_list_all_has_no_query() {
        let (base_url, server) = serve_once("200 OK", "[]").await;
        let api = HttpMovieApi::new(base_url).unwrap();

        let movies = api.list_movies(&MovieQuery::All).await.unwrap();
        assert!(movies.is_empty());

        let raw = server.await.unwrap();
        assert!(request_line(&raw).starts_with("GET /movies "));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let (base_url, _server) = serve_once("200 OK", r#"{"not": "a list"}"#).await;
        let api = HttpMovieApi::new(base_url).unwrap();

        let err = api.list_movies(&MovieQuery::All).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let api = HttpMovieApi::new(base_url).unwrap();
        let err = api.delete_movie("Alien").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.label(), "request failed");
    }
}
