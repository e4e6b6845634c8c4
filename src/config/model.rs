//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

use crate::app::wizard::DisplayType;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote directory endpoints and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the state/city directory, without a trailing path.
    #[serde(default = "default_state_city_base_url")]
    pub state_city_base_url: String,
    #[serde(default = "default_brewery_base_url")]
    pub brewery_base_url: String,
    #[serde(default = "default_country_code")]
    pub country_code: String,
    /// Sent as `X-CSCAPI-KEY`. Overridden by `COUNTRY_STATE_CITY_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout. Unset means requests may hang indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            state_city_base_url: default_state_city_base_url(),
            brewery_base_url: default_brewery_base_url(),
            country_code: default_country_code(),
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Display mode preselected on step 3 and restored on reset.
    #[serde(default)]
    pub default_display: DisplayType,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            default_display: DisplayType::default(),
        }
    }
}

/// Diagnostic log settings. The TUI owns the terminal, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_state_city_base_url() -> String {
    "https://api.countrystatecity.in/v1".to_string()
}
fn default_brewery_base_url() -> String {
    "https://api.openbrewerydb.org".to_string()
}
fn default_country_code() -> String {
    "US".to_string()
}
fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/brewfinder".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
