use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Environment variable that overrides the configured API base URL
pub const BASE_URL_ENV: &str = "BACK_END_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        normalize_base_url(&self.api.base_url)?;
        Ok(())
    }

    /// Base URL to call, by precedence: command-line flag, `BACK_END_URL`, config file
    pub fn effective_base_url(&self, cli_override: Option<&str>) -> anyhow::Result<String> {
        let env_value = std::env::var(BASE_URL_ENV).ok();
        self.pick_base_url(cli_override, env_value.as_deref())
    }

    fn pick_base_url(&self, cli_override: Option<&str>, env_value: Option<&str>) -> anyhow::Result<String> {
        let (origin, raw) = if let Some(url) = cli_override.filter(|u| !u.trim().is_empty()) {
            ("flag", url)
        } else if let Some(url) = env_value.filter(|u| !u.trim().is_empty()) {
            (BASE_URL_ENV, url)
        } else {
            ("config", self.api.base_url.as_str())
        };

        let url = normalize_base_url(raw)
            .map_err(|e| anyhow::anyhow!("Invalid base URL from {}: {}", origin, e))?;
        debug!(origin = origin, base_url = %url, "Resolved API base URL");
        Ok(url)
    }
}

/// Trim whitespace and trailing slashes; only http(s) URLs are accepted
pub fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("base URL cannot be empty"));
    }

    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| anyhow::anyhow!("base URL must start with http:// or https://: {}", raw))?;
    if rest.is_empty() {
        return Err(anyhow::anyhow!("base URL has no host: {}", raw));
    }

    Ok(trimmed.to_string())
}
