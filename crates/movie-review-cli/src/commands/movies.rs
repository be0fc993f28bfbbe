use super::{exit_code, with_spinner};
use crate::feedback::{Operation, Outcome};
use crate::forms::non_empty;
use crate::output::Output;
use crate::MovieCommands;
use movie_review_api::MovieApi;
use movie_review_models::{MovieChanges, NewMovie};
use std::process::ExitCode;

pub async fn create_movie(api: &dyn MovieApi, movie: &NewMovie) -> Outcome {
    let result = api.create_movie(movie).await.map(|()| None);
    Outcome::from_result(Operation::CreateMovie, result)
}

pub async fn update_movie(api: &dyn MovieApi, movie_id: i64, changes: &MovieChanges) -> Outcome {
    let result = api.update_movie(movie_id, changes).await.map(|()| None);
    Outcome::from_result(Operation::UpdateMovie, result)
}

pub async fn delete_movie(api: &dyn MovieApi, title: &str) -> Outcome {
    let result = api.delete_movie(title).await.map(Some);
    Outcome::from_result(Operation::DeleteMovie, result)
}

pub async fn run_movie(cmd: MovieCommands, api: &dyn MovieApi, output: &Output) -> ExitCode {
    let outcome = match cmd {
        MovieCommands::Create {
            title,
            director,
            genre,
            release_year,
            image_url,
        } => {
            let movie = NewMovie {
                title,
                director,
                genre,
                release_year,
                image_url,
            };
            with_spinner(output, "Creating movie...", create_movie(api, &movie)).await
        }
        MovieCommands::Update {
            movie_id,
            title,
            director,
            genre,
            release_year,
            image_url,
        } => {
            let changes = MovieChanges {
                title: non_empty(title),
                director: non_empty(director),
                genre: non_empty(genre),
                release_year,
                image_url: non_empty(image_url),
            };
            warn_if_unchanged(changes.to_payload().is_empty(), output);
            with_spinner(output, "Updating movie...", update_movie(api, movie_id, &changes)).await
        }
        MovieCommands::Delete { title } => {
            with_spinner(output, "Deleting movie...", delete_movie(api, &title)).await
        }
    };

    outcome.report(output);
    exit_code(outcome.succeeded)
}

pub(crate) fn warn_if_unchanged(empty: bool, output: &Output) {
    if empty {
        output.warn("No fields to change; sending an empty update");
    }
}
