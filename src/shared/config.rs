//! Application configuration module
//!
//! The backend location is an explicit value built at startup and injected
//! into the API client constructor; nothing reads a global base URL at call
//! time. The builder accepts either a bare host (the backend always listens
//! on port 3000 unless told otherwise) or a complete server URL.

use thiserror::Error;

/// Port the posture backend listens on unless overridden
pub const DEFAULT_API_PORT: u16 = 3000;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Full server URL, e.g. `http://192.168.1.135:3000`
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    host: Option<String>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    /// Set the full server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the backend host; the URL becomes `http://<host>:<port>`
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Override the backend port (only meaningful together with `host`)
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let server_url = match (self.server_url, self.host) {
            (Some(url), _) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidUrl(url));
                }
                Some(url.trim_end_matches('/').to_string())
            }
            (None, Some(host)) => {
                if host.is_empty() || host.contains('/') || host.contains(char::is_whitespace) {
                    return Err(ConfigError::InvalidUrl(host));
                }
                let port = self.port.unwrap_or(DEFAULT_API_PORT);
                Some(format!("http://{}:{}", host, port))
            }
            (None, None) => None,
        };
        Ok(AppConfig { server_url })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_host() {
        let config = AppConfig::builder().host("192.168.1.135").build().unwrap();
        assert_eq!(
            config.server_url.as_deref(),
            Some("http://192.168.1.135:3000")
        );
    }

    #[test]
    fn test_build_from_host_and_port() {
        let config = AppConfig::builder().host("localhost").port(8080).build().unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_full_url_wins_over_host() {
        let config = AppConfig::builder()
            .server_url("http://10.0.2.2:3000/")
            .host("ignored")
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://10.0.2.2:3000"));
    }

    #[test]
    fn test_rejects_bad_host() {
        assert!(AppConfig::builder().host("").build().is_err());
        assert!(AppConfig::builder().host("a b").build().is_err());
        assert!(AppConfig::builder().host("host/path").build().is_err());
    }

    #[test]
    fn test_rejects_schemeless_url() {
        assert!(AppConfig::builder().server_url("localhost:3000").build().is_err());
    }
}
