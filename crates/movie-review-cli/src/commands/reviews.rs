use super::movies::warn_if_unchanged;
use super::{exit_code, with_spinner};
use crate::feedback::{Operation, Outcome};
use crate::forms::non_empty;
use crate::output::Output;
use crate::ReviewCommands;
use movie_review_api::MovieApi;
use movie_review_models::{NewReview, ReviewChanges};
use std::process::ExitCode;

/// `title` picks the endpoint and `review.movie_id` goes in the body; the two are not cross-checked
pub async fn create_review(api: &dyn MovieApi, title: &str, review: &NewReview) -> Outcome {
    let result = api.create_review(title, review).await.map(|()| None);
    Outcome::from_result(Operation::CreateReview, result)
}

pub async fn update_review(api: &dyn MovieApi, title: &str, review_id: i64, changes: &ReviewChanges) -> Outcome {
    let result = api.update_review(title, review_id, changes).await.map(|()| None);
    Outcome::from_result(Operation::UpdateReview, result)
}

pub async fn delete_review(api: &dyn MovieApi, title: &str, review_id: i64) -> Outcome {
    let result = api.delete_review(title, review_id).await.map(|()| None);
    Outcome::from_result(Operation::DeleteReview, result)
}

pub async fn run_review(cmd: ReviewCommands, api: &dyn MovieApi, output: &Output) -> ExitCode {
    let outcome = match cmd {
        ReviewCommands::Create {
            title,
            movie_id,
            content,
            rating,
        } => {
            let review = NewReview {
                movie_id,
                content,
                rating,
            };
            with_spinner(output, "Submitting review...", create_review(api, &title, &review)).await
        }
        ReviewCommands::Update {
            title,
            review_id,
            content,
            rating,
        } => {
            let changes = ReviewChanges {
                content: non_empty(content),
                rating,
            };
            warn_if_unchanged(changes.to_payload().is_empty(), output);
            with_spinner(output, "Updating review...", update_review(api, &title, review_id, &changes)).await
        }
        ReviewCommands::Delete { title, review_id } => {
            with_spinner(output, "Deleting review...", delete_review(api, &title, review_id)).await
        }
    };

    outcome.report(output);
    exit_code(outcome.succeeded)
}
