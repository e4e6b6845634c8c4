pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{ApiConfig, AppConfig, LoggingConfig};

/// Environment variable holding the state/city provider key.
pub const API_KEY_ENV: &str = "COUNTRY_STATE_CITY_API_KEY";

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("brewfinder")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?
    } else {
        AppConfig::default()
    };
    config.api.api_key = resolve_api_key(config.api.api_key, std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

/// The environment wins over the config file; blank values count as unset.
fn resolve_api_key(from_file: Option<String>, from_env: Option<String>) -> Option<String> {
    from_env
        .filter(|k| !k.trim().is_empty())
        .or(from_file.filter(|k| !k.trim().is_empty()))
}
