//! egui Native Desktop App Module
//!
//! This module provides the native desktop application using egui/eframe
//! that talks to the posture backend over REST.
//!
//! # Architecture
//!
//! The app module is organized into focused submodules:
//!
//! - **`config`** - Client configuration (server URL composition)
//! - **`api`** - Blocking API client for the backend REST surface
//! - **`capture`** - Two-phase capture pipeline and gallery batch import
//! - **`nav`** - Typed route payloads and the navigation stack
//! - **`images`** - Photo and overlay decoding for display
//! - **`state`** - Central application state polled each frame
//! - **`views`** - One render module per screen
//! - **`theme`** - Color constants
//! - **`main`** - Application entry point (binary)

pub mod api;
pub mod capture;
pub mod config;
pub mod images;
pub mod nav;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Config;
pub use nav::{NavStack, Route};
pub use state::AppState;
