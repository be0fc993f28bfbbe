use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{browse, config, interactive, movies, reviews};
use std::process::ExitCode;

mod commands;
mod feedback;
mod forms;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "movie-review")]
#[command(about = "Movie Review Sentiment Explorer - manage movies and reviews on a movie review service")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Base URL of the movie review service (overrides BACK_END_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Movie management: create, update or delete a movie
    Movie {
        #[command(subcommand)]
        cmd: MovieCommands,
    },
    /// Review management: add, update or delete a review
    Review {
        #[command(subcommand)]
        cmd: ReviewCommands,
    },
    /// List movies, optionally filtered
    #[command(long_about = "List movies with their reviews, average rating and overall sentiment. Filters are combined; --all ignores every filter.")]
    Browse(BrowseArgs),
    /// Form-driven menu with the Movies, Reviews and View Movies screens (default)
    Interactive,
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum MovieCommands {
    /// Add a new movie
    Create {
        /// Movie title
        #[arg(long)]
        title: String,

        /// Director
        #[arg(long)]
        director: String,

        /// Genre
        #[arg(long)]
        genre: String,

        /// Release year (1886-2026)
        #[arg(long, value_parser = forms::parse_release_year)]
        release_year: i32,

        /// Poster image URL
        #[arg(long, default_value = "")]
        image_url: String,
    },
    /// Update an existing movie; only the given fields are sent
    Update {
        /// Identifier of the movie to update
        #[arg(value_parser = forms::parse_identifier)]
        movie_id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New director
        #[arg(long)]
        director: Option<String>,

        /// New genre
        #[arg(long)]
        genre: Option<String>,

        /// New release year (1886-2026)
        #[arg(long, value_parser = forms::parse_release_year)]
        release_year: Option<i32>,

        /// New poster image URL
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Delete a movie by title
    Delete {
        /// Title of the movie to delete
        title: String,
    },
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// Add a review to a movie
    #[command(long_about = "Add a review to a movie. The title selects the endpoint; the movie identifier is sent in the body as given.")]
    Create {
        /// Title of the movie being reviewed
        title: String,

        /// Identifier of the movie being reviewed
        #[arg(long, value_parser = forms::parse_identifier)]
        movie_id: i64,

        /// Review text
        #[arg(long)]
        content: String,

        /// Rating from 0 to 10
        #[arg(long, value_parser = forms::parse_rating)]
        rating: f64,
    },
    /// Update a review; only the given, non-empty fields are sent
    Update {
        /// Title of the reviewed movie
        title: String,

        /// Identifier of the review
        #[arg(value_parser = forms::parse_identifier)]
        review_id: i64,

        /// New review text
        #[arg(long)]
        content: Option<String>,

        /// New rating from 0 to 10 (0 leaves the rating unchanged)
        #[arg(long, value_parser = forms::parse_rating)]
        rating: Option<f64>,
    },
    /// Delete a review
    Delete {
        /// Title of the reviewed movie
        title: String,

        /// Identifier of the review to delete
        #[arg(value_parser = forms::parse_identifier)]
        review_id: i64,
    },
}

#[derive(Args)]
struct BrowseArgs {
    /// Show all movies, ignoring every filter
    #[arg(long, action = ArgAction::SetTrue)]
    all: bool,

    /// Filter by title
    #[arg(long)]
    title: Option<String>,

    /// Filter by director
    #[arg(long)]
    director: Option<String>,

    /// Filter by genre
    #[arg(long)]
    genre: Option<String>,

    /// Filter by release year
    #[arg(long, value_parser = forms::parse_release_year)]
    release_year: Option<i32>,

    /// Minimum average rating in steps of 0.5 (0 disables the filter)
    #[arg(long, value_parser = forms::parse_min_rating)]
    min_rating: Option<f64>,

    /// Overall sentiment: positive, neutral or negative
    #[arg(long, value_parser = forms::parse_sentiment)]
    sentiment: Option<movie_review_models::Sentiment>,

    /// One table row per movie instead of full entries
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the configuration file location and the base URL in effect
    Show,
    /// Write a configuration file storing --base-url (or the default base URL)
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let base_url = cli.base_url.as_deref();

    let code = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Movie { cmd } => movies::run_movie(cmd, &commands::connect(base_url)?, &output).await,
        Commands::Review { cmd } => reviews::run_review(cmd, &commands::connect(base_url)?, &output).await,
        Commands::Browse(args) => browse::run_browse(args, &commands::connect(base_url)?, &output).await,
        Commands::Interactive => interactive::run_interactive(&commands::connect(base_url)?, &output).await?,
        Commands::Config { cmd } => config::run_config(cmd, base_url, &output)?,
    };

    Ok(code)
}
