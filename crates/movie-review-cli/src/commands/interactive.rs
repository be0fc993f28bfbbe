//! Prompt-driven forms for the Movies, Reviews and View Movies screens.
//! Every form runs the same operation as its subcommand.

use super::browse::{fetch_movies, show_movies};
use super::movies::{create_movie, delete_movie, update_movie, warn_if_unchanged};
use super::prompts::{prompt_optional_parsed, prompt_optional_string, prompt_parsed, prompt_select, prompt_string, prompt_yes_no};
use super::reviews::{create_review, delete_review, update_review};
use super::{exit_code, with_spinner};
use crate::forms::{parse_identifier, parse_min_rating, parse_rating, parse_release_year};
use crate::output::Output;
use crate::render;
use color_eyre::Result;
use movie_review_api::MovieApi;
use movie_review_models::{Movie, MovieChanges, MovieFilter, MovieQuery, NewMovie, NewReview, ReviewChanges, Sentiment};
use std::process::ExitCode;

pub async fn run_interactive(api: &dyn MovieApi, output: &Output) -> Result<ExitCode> {
    if !super::progress::is_interactive() {
        output.error("Interactive mode needs a terminal. Use the movie, review or browse commands instead.");
        return Ok(exit_code(false));
    }
    if !output.is_human() {
        output.error("Interactive mode only supports --output human.");
        return Ok(exit_code(false));
    }

    output.println("🎥 Movie Review Sentiment Explorer");
    let views = ["🎥 Movies", "💬 Reviews", "📋 View Movies", "Quit"];
    loop {
        match prompt_select("Choose a screen", &views, 0)? {
            0 => movie_screen(api, output).await?,
            1 => review_screen(api, output).await?,
            2 => browse_screen(api, output).await?,
            _ => break,
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn movie_screen(api: &dyn MovieApi, output: &Output) -> Result<()> {
    let forms = ["🎬 Add a New Movie", "✏️  Update an Existing Movie", "🗑️  Delete a Movie", "Back"];
    let outcome = match prompt_select("🎥 Movie Management", &forms, 0)? {
        0 => {
            let movie = NewMovie {
                title: prompt_string("Movie Title", None)?,
                director: prompt_string("Director", None)?,
                genre: prompt_string("Genre", None)?,
                release_year: prompt_parsed("Release Year", Some("1886"), parse_release_year, output)?,
                image_url: prompt_string("Image URL", None)?,
            };
            with_spinner(output, "Creating movie...", create_movie(api, &movie)).await
        }
        1 => {
            let movie_id = prompt_parsed("Movie ID to Update", Some("0"), parse_identifier, output)?;
            let changes = MovieChanges {
                title: prompt_optional_string("New Title (Optional)")?,
                director: prompt_optional_string("New Director (Optional)")?,
                genre: prompt_optional_string("New Genre (Optional)")?,
                release_year: prompt_optional_parsed("New Release Year (Optional)", parse_release_year, output)?,
                image_url: prompt_optional_string("New Image URL (Optional)")?,
            };
            warn_if_unchanged(changes.to_payload().is_empty(), output);
            with_spinner(output, "Updating movie...", update_movie(api, movie_id, &changes)).await
        }
        2 => {
            let title = prompt_string("Title of Movie to Delete", None)?;
            with_spinner(output, "Deleting movie...", delete_movie(api, &title)).await
        }
        _ => return Ok(()),
    };

    outcome.report(output);
    Ok(())
}

async fn review_screen(api: &dyn MovieApi, output: &Output) -> Result<()> {
    let forms = ["💬 Add a Review to a Movie", "🔄 Update a Review", "🧹 Delete a Review", "Back"];
    let outcome = match prompt_select("💬 Review Management", &forms, 0)? {
        0 => {
            let title = prompt_string("Movie Title (for the review)", None)?;
            let review = NewReview {
                movie_id: prompt_parsed("Movie Identifier", None, parse_identifier, output)?,
                content: prompt_string("Review Content", None)?,
                rating: prompt_parsed("Rating (0-10)", Some("0.0"), parse_rating, output)?,
            };
            with_spinner(output, "Submitting review...", create_review(api, &title, &review)).await
        }
        1 => {
            let title = prompt_string("Movie Title (for the review)", None)?;
            let review_id = prompt_parsed("Review Identifier", Some("0"), parse_identifier, output)?;
            let changes = ReviewChanges {
                content: prompt_optional_string("Updated Content (optional)")?,
                rating: prompt_optional_parsed("Updated Rating (optional, 0-10)", parse_rating, output)?,
            };
            warn_if_unchanged(changes.to_payload().is_empty(), output);
            with_spinner(output, "Updating review...", update_review(api, &title, review_id, &changes)).await
        }
        2 => {
            let title = prompt_string("Movie Title", None)?;
            let review_id = prompt_parsed("Review ID to delete", Some("0"), parse_identifier, output)?;
            with_spinner(output, "Deleting review...", delete_review(api, &title, review_id)).await
        }
        _ => return Ok(()),
    };

    outcome.report(output);
    Ok(())
}

async fn browse_screen(api: &dyn MovieApi, output: &Output) -> Result<()> {
    let show_all = prompt_yes_no("📜 Show All Movies (Ignore Filters)?", Some(false))?;
    let query = if show_all {
        MovieQuery::All
    } else {
        MovieQuery::Filtered(prompt_filter(output)?)
    };

    let movies = match with_spinner(output, "Fetching movies...", fetch_movies(api, &query)).await {
        Ok(movies) => movies,
        Err(message) => {
            output.error(message);
            return Ok(());
        }
    };

    if movies.is_empty() {
        show_movies(&movies, false, output);
        return Ok(());
    }
    expand_entries(&movies, output)
}

fn prompt_filter(output: &Output) -> Result<MovieFilter> {
    let sentiments = ["(any)", "positive", "neutral", "negative"];

    let title = prompt_optional_string("🎬 Title")?;
    let director = prompt_optional_string("🎬 Director")?;
    let genre = prompt_optional_string("📚 Genre")?;
    let release_year = prompt_optional_parsed("📅 Release Year", parse_release_year, output)?;
    let min_rating = prompt_parsed("⭐ Minimum Rating (0-10, steps of 0.5)", Some("0.0"), parse_min_rating, output)?;
    let sentiment = match prompt_select("💬 Sentiment", &sentiments, 0)? {
        0 => None,
        i => Sentiment::ALL.get(i - 1).copied(),
    };

    Ok(MovieFilter {
        title,
        director,
        genre,
        release_year,
        min_rating: Some(min_rating),
        sentiment,
    })
}

/// Collapsed list of headings; picking one prints the full entry
fn expand_entries(movies: &[Movie], output: &Output) -> Result<()> {
    let entries = render::entries(movies);
    let mut choices: Vec<String> = entries.iter().map(|e| format!("▸ {}", e.heading)).collect();
    choices.push("Back".to_string());

    let mut selected = 0;
    loop {
        selected = prompt_select(&format!("{} movie(s) found", entries.len()), &choices, selected)?;
        match entries.get(selected) {
            Some(entry) => {
                output.println(entry.expanded());
                output.println("");
            }
            None => return Ok(()),
        }
    }
}
