use super::exit_code;
use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_review_config::{normalize_base_url, ApiConfig, Config, PathManager, BASE_URL_ENV, DEFAULT_BASE_URL};
use serde_json::json;
use std::process::ExitCode;

pub fn run_config(cmd: ConfigCommands, base_url_flag: Option<&str>, output: &Output) -> Result<ExitCode> {
    let path_manager = PathManager::default();

    match cmd {
        ConfigCommands::Show => show_config(&path_manager, base_url_flag, output),
        ConfigCommands::Init { force } => init_config(&path_manager, base_url_flag, force, output),
    }
}

fn show_config(path_manager: &PathManager, base_url_flag: Option<&str>, output: &Output) -> Result<ExitCode> {
    let config_file = path_manager.config_file();
    let exists = config_file.exists();
    let config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    let effective = config
        .effective_base_url(base_url_flag)
        .map_err(|e| eyre!("{}", e))?;
    let env_value = std::env::var(BASE_URL_ENV).ok();

    if output.is_human() {
        output.info(format!(
            "Config file:      {}{}",
            config_file.display(),
            if exists { "" } else { " (not created)" }
        ));
        output.info(format!("Configured URL:   {}", config.api.base_url));
        output.info(format!(
            "{}:     {}",
            BASE_URL_ENV,
            env_value.as_deref().unwrap_or("(unset)")
        ));
        output.info(format!("Base URL in use:  {}", effective));
    } else {
        output.json(&json!({
            "config_file": config_file.display().to_string(),
            "exists": exists,
            "configured_base_url": config.api.base_url,
            "env_base_url": env_value,
            "base_url": effective,
        }));
    }

    Ok(ExitCode::SUCCESS)
}

fn init_config(path_manager: &PathManager, base_url_flag: Option<&str>, force: bool, output: &Output) -> Result<ExitCode> {
    let config_file = path_manager.config_file();
    if config_file.exists() && !force {
        output.error(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_file.display()
        ));
        return Ok(exit_code(false));
    }

    let base_url = normalize_base_url(base_url_flag.unwrap_or(DEFAULT_BASE_URL))
        .map_err(|e| eyre!("{}", e))?;
    let config = Config {
        api: ApiConfig { base_url },
    };

    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create {}: {}", path_manager.config_dir().display(), e))?;
    config
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write {}: {}", config_file.display(), e))?;

    output.success(format!(
        "✅ Wrote {} (base URL {})",
        config_file.display(),
        config.api.base_url
    ));
    Ok(exit_code(true))
}
