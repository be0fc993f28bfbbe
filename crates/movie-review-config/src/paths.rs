use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base path override from the environment, if set
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("MOVIE_REVIEW_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("movie-review");

        Ok(Self { config_dir })
    }

    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { config_dir: base.into() }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::with_base(base);
        }

        // Platform config dir (e.g. ~/.config/movie-review on Linux), else the working directory
        Self::new().unwrap_or_else(|_| Self::with_base(".movie-review"))
    }
}
