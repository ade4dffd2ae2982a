//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STALE_CARD_HOURS: i64 = 24;
const DEFAULT_RENDER_WAIT_MS: u64 = 5000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Base URL of the statistics API the dashboard panels read from
    pub api_base_url: String,
    /// Frontend URL allowed to call the API cross-origin
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// A user's last published card older than this counts as stale
    pub stale_card_hours: i64,
    /// How long `GET /` waits for panels before rendering
    pub render_wait: Duration,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: format!("http://127.0.0.1:{}", DEFAULT_PORT),
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            stale_card_hours: DEFAULT_STALE_CARD_HOURS,
            render_wait: Duration::from_millis(DEFAULT_RENDER_WAIT_MS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        // Without an explicit API, the dashboard reads from this same process.
        let api_base_url = match env::var("API_BASE_URL") {
            Ok(url) => validate_base_url(url.trim())?,
            Err(_) => format!("http://127.0.0.1:{}", port),
        };

        Ok(Self {
            port,
            api_base_url,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            stale_card_hours: env::var("STALE_CARD_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|h: &i64| *h >= 0)
                .unwrap_or(DEFAULT_STALE_CARD_HOURS),
            render_wait: Duration::from_millis(
                env::var("RENDER_WAIT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_RENDER_WAIT_MS),
            ),
        })
    }
}

fn validate_base_url(url: &str) -> Result<String, ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidApiBaseUrl(url.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_BASE_URL must be an http(s) URL, got {0:?}")]
    InvalidApiBaseUrl(String),
}
