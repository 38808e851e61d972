//! UI theme for the posture desktop app.

pub mod colors;
