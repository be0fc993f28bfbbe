use crate::output::Output;
use movie_review_api::ApiError;

/// The seven form submissions the client can make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateMovie,
    UpdateMovie,
    DeleteMovie,
    CreateReview,
    UpdateReview,
    DeleteReview,
    ListMovies,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateMovie => "create_movie",
            Operation::UpdateMovie => "update_movie",
            Operation::DeleteMovie => "delete_movie",
            Operation::CreateReview => "create_review",
            Operation::UpdateReview => "update_review",
            Operation::DeleteReview => "delete_review",
            Operation::ListMovies => "list_movies",
        }
    }

    /// Fixed confirmation text. Deleting a movie echoes the server's message instead.
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Operation::CreateMovie => Some("✅ Movie created successfully!"),
            Operation::UpdateMovie => Some("✅ Movie updated successfully!"),
            Operation::CreateReview => Some("✅ Review created successfully!"),
            Operation::UpdateReview => Some("✅ Review updated!"),
            Operation::DeleteReview => Some("✅ Review deleted and movie aggregates updated."),
            Operation::DeleteMovie | Operation::ListMovies => None,
        }
    }

    // Review forms have always used a hyphen here
    fn separator(&self) -> &'static str {
        match self {
            Operation::CreateReview | Operation::UpdateReview | Operation::DeleteReview => "-",
            _ => "—",
        }
    }

    pub fn failure_message(&self, err: &ApiError) -> String {
        format!("❌ {} {} {}.", err.label(), self.separator(), err.detail())
    }
}

/// What a single submission ended with, ready to show
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub operation: Operation,
    pub succeeded: bool,
    pub message: String,
}

impl Outcome {
    /// `result` carries the server's message for operations without a fixed one
    pub fn from_result(operation: Operation, result: Result<Option<String>, ApiError>) -> Self {
        match result {
            Ok(server_message) => {
                let message = operation
                    .success_message()
                    .map(str::to_string)
                    .or(server_message)
                    .unwrap_or_default();
                Self {
                    operation,
                    succeeded: true,
                    message,
                }
            }
            Err(err) => {
                tracing::debug!(operation = operation.name(), status = ?err.status(), error = %err, "Submission failed");
                Self {
                    operation,
                    succeeded: false,
                    message: operation.failure_message(&err),
                }
            }
        }
    }

    pub fn report(&self, output: &Output) {
        if self.succeeded {
            output.success(&self.message);
        } else {
            output.error(&self.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            detail: Some("not found".to_string()),
        }
    }

    #[test]
    fn test_movie_failures_use_em_dash() {
        for op in [Operation::CreateMovie, Operation::UpdateMovie, Operation::DeleteMovie, Operation::ListMovies] {
            assert_eq!(op.failure_message(&not_found()), "❌ 404 — not found.");
        }
    }

    #[test]
    fn test_review_failures_use_hyphen() {
        for op in [Operation::CreateReview, Operation::UpdateReview, Operation::DeleteReview] {
            assert_eq!(op.failure_message(&not_found()), "❌ 404 - not found.");
        }
    }

    #[test]
    fn test_missing_detail_renders_none() {
        let err = ApiError::Status { status: 500, detail: None };
        assert_eq!(Operation::CreateMovie.failure_message(&err), "❌ 500 — None.");
    }

    #[test]
    fn test_delete_movie_uses_server_message() {
        let outcome = Outcome::from_result(Operation::DeleteMovie, Ok(Some("Movie deleted".to_string())));
        assert!(outcome.succeeded);
        assert_eq!(outcome.message, "Movie deleted");
    }

    #[test]
    fn test_delete_review_ignores_server_message() {
        let outcome = Outcome::from_result(Operation::DeleteReview, Ok(Some("whatever".to_string())));
        assert_eq!(outcome.message, "✅ Review deleted and movie aggregates updated.");
    }
}
