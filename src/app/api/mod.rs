//! API Client for the Posture Backend
//!
//! One blocking method per backend operation. Each call creates a tokio
//! runtime and blocks on the async reqwest request; UI code never calls these
//! on the paint thread — screens spawn a worker thread and report the result
//! back over an mpsc channel.
//!
//! Status handling is uniform: non-2xx becomes [`ApiError::Http`] with the
//! response body attached, a rejected request becomes [`ApiError::Network`],
//! and an unreadable 2xx body becomes [`ApiError::Decode`]. The analyze
//! endpoint is the exception and maps backend failures to
//! [`ApiError::Analysis`] so the capture pipeline can tell them apart.

use reqwest::{Client, Response};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::app::config::Config;
use crate::shared::error::ApiError;

mod photos;
mod records;
mod students;

/// Blocking client over the backend REST surface
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Base URL composition for an endpoint path
    pub(crate) fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    pub(crate) fn runtime() -> Result<Runtime, ApiError> {
        Runtime::new().map_err(|e| ApiError::network(format!("Failed to create runtime: {}", e)))
    }

    /// DELETE with idempotent semantics: a 404 means the record is already
    /// gone, which callers treat as success so a second delete of the same id
    /// is a user-visible no-op.
    pub(crate) fn delete_resource(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .delete(&url)
                .send()
                .await
                .map_err(ApiError::from)?;

            let status = response.status();
            if status.is_success() {
                return Ok(());
            }
            if status.as_u16() == 404 {
                debug!(%url, "delete target already gone");
                return Ok(());
            }
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ApiError::http(status.as_u16(), body))
        })
    }
}

/// Turn a non-2xx response into an [`ApiError::Http`] with its body attached
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|_| status.to_string());
    Err(ApiError::http(status.as_u16(), body))
}
