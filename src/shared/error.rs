//! Shared Error Types
//!
//! This module defines the error taxonomy used across the app. Every failure
//! is screen-local and recoverable: validation errors block submission before
//! any network call, everything else is surfaced as an alert and leaves the
//! screen in its pre-call state.
//!
//! # Error Categories
//!
//! - `Network` - the request never produced an HTTP response
//! - `Http` - the backend answered with a non-2xx status
//! - `Validation` - client-side required/invalid field, caught pre-network
//! - `Analysis` - the posture analyze step failed after a successful upload
//! - `OrphanCompensation` - the cleanup delete of an orphaned photo failed;
//!   logged, never surfaced, since the user already saw the primary error
//! - `Decode` - the backend answered 2xx but the body was not understood
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and cross worker-thread channels intact.
use thiserror::Error;

/// Errors produced by the API client and the capture pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The request failed before an HTTP response existed
    #[error("network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("server returned {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, best effort
        body: String,
    },

    /// Client-side validation failure, raised before any network call
    #[error("validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The backend reported a posture-analysis failure
    #[error("posture analysis failed: {message}")]
    Analysis {
        /// Human-readable error message
        message: String,
    },

    /// The compensating delete of an orphaned photo failed
    #[error("failed to remove orphaned photo {photo_id}: {source}")]
    OrphanCompensation {
        /// Photo left behind by a failed analysis
        photo_id: i64,
        /// The delete failure itself
        #[source]
        source: Box<ApiError>,
    },

    /// A 2xx response whose body could not be decoded
    #[error("could not decode server response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new analysis error
    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    /// Wrap a delete failure that left an orphaned photo behind
    pub fn orphan_compensation(photo_id: i64, source: ApiError) -> Self {
        Self::OrphanCompensation {
            photo_id,
            source: Box::new(source),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether the error is a client-side validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}
