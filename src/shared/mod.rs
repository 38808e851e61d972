//! Types shared between the desktop app and the backend wire format.

pub mod config;
pub mod error;
pub mod model;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ApiError;
