pub mod browse;
pub mod config;
pub mod interactive;
pub mod movies;
pub mod progress;
pub mod prompts;
pub mod reviews;

#[cfg(test)]
pub(crate) mod fake_api;

use crate::output::Output;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use movie_review_api::HttpMovieApi;
use movie_review_config::{Config, PathManager};
use progress::RequestSpinner;
use std::future::Future;
use std::process::ExitCode;
use tracing::info;

/// Build the HTTP client against the base URL in effect
pub fn connect(base_url_flag: Option<&str>) -> Result<HttpMovieApi> {
    let path_manager = PathManager::default();
    let config = Config::load_or_default(&path_manager.config_file())
        .map_err(|e| eyre!("Failed to load config from {}: {}", path_manager.config_file().display(), e))?;
    let base_url = config
        .effective_base_url(base_url_flag)
        .map_err(|e| eyre!("{}", e))?;

    info!(base_url = %base_url, "Using movie review service");
    HttpMovieApi::new(base_url).wrap_err("Failed to build HTTP client")
}

/// Await one request with a spinner up while it is in flight
pub async fn with_spinner<T>(output: &Output, message: &str, request: impl Future<Output = T>) -> T {
    let spinner = RequestSpinner::start(output, message);
    let result = request.await;
    spinner.finish();
    result
}

pub fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
