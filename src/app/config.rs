use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL when nothing is supplied at startup
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration wrapper.
///
/// Built once at startup and handed to [`crate::app::ApiClient`]; call sites
/// never consult environment state themselves.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Wrap an already-built application configuration
    pub fn new(app: AppConfig) -> Self {
        Self { app }
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
        })
    }

    /// Build from process environment: `POSTUREDESK_API_URL` takes a full
    /// URL, otherwise `POSTUREDESK_API_HOST` composes `http://<host>:3000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = if let Ok(url) = std::env::var("POSTUREDESK_API_URL") {
            AppConfig::builder().server_url(url)
        } else if let Ok(host) = std::env::var("POSTUREDESK_API_HOST") {
            AppConfig::builder().host(host)
        } else {
            AppConfig::builder()
        };
        Self::with_builder(builder)
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
