pub mod config;
pub mod paths;

pub use config::{ApiConfig, BASE_URL_ENV, Config, DEFAULT_BASE_URL, normalize_base_url};
pub use paths::{PathManager, base_path_override};
