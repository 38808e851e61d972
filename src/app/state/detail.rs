//! State for the student detail aggregate screen.
//!
//! On focus the screen fetches measurements, sessions, and photos on three
//! independent worker threads. The full-screen spinner shows on first mount
//! only; refreshes after mutations and the refresh button are silent.

use std::sync::mpsc::{channel, Receiver};

use super::AppState;
use crate::shared::error::ApiError;
use crate::shared::model::{Measurement, Photo, PostureAnalysis, Session};

/// Item selected for deletion, awaiting confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    Student { id: i64, name: String },
    Measurement { id: i64 },
    Session { id: i64 },
    Photo { id: i64 },
}

impl DeleteTarget {
    /// Text for the confirm dialog
    pub fn describe(&self) -> String {
        match self {
            DeleteTarget::Student { name, .. } => {
                format!("Delete student \"{}\" and all their records?", name)
            }
            DeleteTarget::Measurement { .. } => "Delete this measurement?".to_string(),
            DeleteTarget::Session { .. } => "Delete this session?".to_string(),
            DeleteTarget::Photo { .. } => "Delete this photo?".to_string(),
        }
    }
}

pub struct DetailState {
    /// Which student the loaded lists belong to
    pub student_id: Option<i64>,
    pub student_name: String,
    pub measurements: Vec<Measurement>,
    pub sessions: Vec<Session>,
    pub photos: Vec<Photo>,
    /// Full-screen spinner, first mount only
    pub loading: bool,
    /// Set after a mutation; triggers a silent refetch on focus
    pub dirty: bool,
    /// Whether a fetch has ever started for this student; decides spinner
    /// vs. silent refresh
    pub fetched_once: bool,
    pub error: Option<String>,
    /// Photo whose analysis history is expanded, with the fetched records
    pub history: Option<(i64, Vec<PostureAnalysis>)>,
    pub measurements_rx: Option<Receiver<Result<Vec<Measurement>, ApiError>>>,
    pub sessions_rx: Option<Receiver<Result<Vec<Session>, ApiError>>>,
    pub photos_rx: Option<Receiver<Result<Vec<Photo>, ApiError>>>,
    pub history_rx: Option<(i64, Receiver<Result<Vec<PostureAnalysis>, ApiError>>)>,
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            student_id: None,
            student_name: String::new(),
            measurements: Vec::new(),
            sessions: Vec::new(),
            photos: Vec::new(),
            loading: false,
            dirty: false,
            fetched_once: false,
            error: None,
            history: None,
            measurements_rx: None,
            sessions_rx: None,
            photos_rx: None,
            history_rx: None,
        }
    }

    /// Point the detail state at a student. Switching students drops any
    /// in-flight receivers, so late responses for the previous student are
    /// discarded.
    pub fn enter(&mut self, student_id: i64, student_name: &str) {
        if self.student_id != Some(student_id) {
            *self = Self::new();
            self.student_id = Some(student_id);
            self.dirty = true;
        }
        self.student_name = student_name.to_string();
    }

    pub fn is_fetching(&self) -> bool {
        self.measurements_rx.is_some() || self.sessions_rx.is_some() || self.photos_rx.is_some()
    }

}

impl AppState {
    /// Fetch the three lists concurrently. First mount shows the spinner;
    /// every later call is silent.
    pub fn load_detail(&mut self, silent: bool) {
        let Some(student_id) = self.detail.student_id else {
            return;
        };
        if self.detail.is_fetching() {
            return;
        }
        self.detail.loading = !silent;
        self.detail.dirty = false;
        self.detail.fetched_once = true;
        self.detail.error = None;

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.student_measurements(student_id));
        });
        self.detail.measurements_rx = Some(rx);

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.student_sessions(student_id));
        });
        self.detail.sessions_rx = Some(rx);

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.student_photos(student_id));
        });
        self.detail.photos_rx = Some(rx);
    }

    /// Expand (or collapse) the analysis history of one photo
    pub fn toggle_history(&mut self, photo_id: i64) {
        if self
            .detail
            .history
            .as_ref()
            .is_some_and(|(id, _)| *id == photo_id)
        {
            self.detail.history = None;
            return;
        }
        if self
            .detail
            .history_rx
            .as_ref()
            .is_some_and(|(id, _)| *id == photo_id)
        {
            return;
        }
        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.posture_history(photo_id));
        });
        self.detail.history_rx = Some((photo_id, rx));
    }

    pub(super) fn poll_detail(&mut self) {
        if let Some(ref rx) = self.detail.measurements_rx {
            if let Ok(result) = rx.try_recv() {
                self.detail.measurements_rx = None;
                match result {
                    Ok(items) => self.detail.measurements = items,
                    Err(e) => self.detail.error = Some(e.to_string()),
                }
            }
        }
        if let Some(ref rx) = self.detail.sessions_rx {
            if let Ok(result) = rx.try_recv() {
                self.detail.sessions_rx = None;
                match result {
                    Ok(items) => self.detail.sessions = items,
                    Err(e) => self.detail.error = Some(e.to_string()),
                }
            }
        }
        if let Some(ref rx) = self.detail.photos_rx {
            if let Ok(result) = rx.try_recv() {
                self.detail.photos_rx = None;
                match result {
                    Ok(items) => self.detail.photos = items,
                    Err(e) => self.detail.error = Some(e.to_string()),
                }
            }
        }
        if !self.detail.is_fetching() {
            self.detail.loading = false;
        }

        if let Some((photo_id, ref rx)) = self.detail.history_rx {
            if let Ok(result) = rx.try_recv() {
                self.detail.history_rx = None;
                match result {
                    Ok(records) => self.detail.history = Some((photo_id, records)),
                    Err(e) => self.detail.error = Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_resets_on_student_change() {
        let mut detail = DetailState::new();
        detail.enter(7, "Maria");
        detail.measurements.push(
            serde_json::from_str(
                r#"{"id":1,"student_id":7,"height":120.0,"weight":25.0,
                    "head_circumference":null,"chest_circumference":null,
                    "abdominal_circumference":null,"physical_disability":null,
                    "created_at":"2025-05-05T10:00:00Z"}"#,
            )
            .unwrap(),
        );
        detail.dirty = false;

        // Same student keeps the data
        detail.enter(7, "Maria");
        assert_eq!(detail.measurements.len(), 1);
        assert!(!detail.dirty);

        // Different student clears it and marks a refetch
        detail.enter(8, "Ion");
        assert!(detail.measurements.is_empty());
        assert!(detail.dirty);
        assert_eq!(detail.student_name, "Ion");
    }

    #[test]
    fn test_delete_target_description() {
        let target = DeleteTarget::Student {
            id: 7,
            name: "Maria".to_string(),
        };
        assert!(target.describe().contains("Maria"));
        assert_eq!(
            DeleteTarget::Photo { id: 1 }.describe(),
            "Delete this photo?"
        );
    }

}
