use super::{exit_code, with_spinner};
use crate::feedback::Operation;
use crate::forms::non_empty;
use crate::output::Output;
use crate::render;
use crate::BrowseArgs;
use movie_review_api::MovieApi;
use movie_review_models::{Movie, MovieFilter, MovieQuery};
use std::process::ExitCode;

/// Always a fresh request; nothing from an earlier listing is reused
pub async fn fetch_movies(api: &dyn MovieApi, query: &MovieQuery) -> Result<Vec<Movie>, String> {
    api.list_movies(query)
        .await
        .map_err(|err| Operation::ListMovies.failure_message(&err))
}

pub fn query_from_args(args: &BrowseArgs) -> MovieQuery {
    let filter = MovieFilter {
        title: non_empty(args.title.clone()),
        director: non_empty(args.director.clone()),
        genre: non_empty(args.genre.clone()),
        release_year: args.release_year,
        min_rating: args.min_rating,
        sentiment: args.sentiment,
    };
    MovieQuery::new(args.all, filter)
}

pub fn show_movies(movies: &[Movie], compact: bool, output: &Output) {
    if !output.is_human() {
        match serde_json::to_value(movies) {
            Ok(value) => output.json(&value),
            Err(e) => output.error(format!("Failed to serialize movies: {}", e)),
        }
        return;
    }

    if movies.is_empty() {
        output.info("No movies found.");
        return;
    }

    if compact {
        output.println(render::summary_table(movies).to_string());
        return;
    }

    for entry in render::entries(movies) {
        output.println(entry.expanded());
        output.println("");
    }
}

pub async fn run_browse(args: BrowseArgs, api: &dyn MovieApi, output: &Output) -> ExitCode {
    let query = query_from_args(&args);
    match &query {
        MovieQuery::Filtered(filter) if !filter.is_empty() => {
            tracing::debug!(filters = filter.query_params().len(), "Browsing with filters");
        }
        _ => tracing::debug!("Browsing all movies"),
    }

    match with_spinner(output, "Fetching movies...", fetch_movies(api, &query)).await {
        Ok(movies) => {
            show_movies(&movies, args.compact, output);
            exit_code(true)
        }
        Err(message) => {
            output.error(message);
            exit_code(false)
        }
    }
}
