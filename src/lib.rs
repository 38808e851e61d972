//! PostureDesk - Main Library
//!
//! PostureDesk is a desktop front-end for tracking students' physical
//! measurements, therapy sessions, and posture-photo analysis. The heavy
//! lifting (keypoint detection, tilt-angle extraction, overlay rendering)
//! happens on a remote backend; this crate is the screens, the navigation,
//! and the HTTP orchestration around that backend.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Backend-facing types
//!   - Wire models (students, measurements, sessions, photos, analyses)
//!   - Error taxonomy
//!   - Application configuration
//!
//! - **`app`** - Native desktop app (egui/eframe)
//!   - API client for the posture backend
//!   - Capture pipeline (upload → analyze → review, with rollback)
//!   - Navigation stack and per-screen views
//!
//! # Concurrency
//!
//! The UI is single-threaded immediate mode (egui). Network operations run on
//! short-lived worker threads and report back over `std::sync::mpsc` channels
//! that the UI polls each frame. Dropping a screen's receiver makes any late
//! completion a no-op.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod app;
