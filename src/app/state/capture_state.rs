//! State for the capture pipeline and the gallery batch import.
//!
//! The worker thread narrates the pipeline over [`CaptureEvent`]s; the UI
//! drains them each frame. If the user has already left the capture screen
//! when the result lands, it is discarded instead of navigating anywhere.

use std::sync::mpsc::{channel, Receiver, TryRecvError};

use egui::TextureHandle;
use tracing::info;

use super::AppState;
use crate::app::capture::{
    capture_and_analyze, import_batch, CapturePhase, ImportOutcome, ImportSource, ReviewData,
};
use crate::app::images;
use crate::app::nav::Route;

/// Progress report from the capture worker
#[derive(Debug)]
pub enum CaptureEvent {
    Phase(CapturePhase),
    Finished(Box<Result<ReviewData, String>>),
}

pub struct CaptureState {
    pub student_id: i64,
    pub student_name: String,
    /// Path of the frame to capture, typed or pasted by the user
    pub path_input: String,
    pub phase: CapturePhase,
    pub error: Option<String>,
    /// Present while the review screen is up
    pub review: Option<ReviewData>,
    pub events_rx: Option<Receiver<CaptureEvent>>,
    /// Lazily-created textures for the review screen
    pub original_tex: Option<TextureHandle>,
    pub overlay_tex: Option<TextureHandle>,
}

impl CaptureState {
    pub fn new() -> Self {
        Self {
            student_id: 0,
            student_name: String::new(),
            path_input: String::new(),
            phase: CapturePhase::Idle,
            error: None,
            review: None,
            events_rx: None,
            original_tex: None,
            overlay_tex: None,
        }
    }

    /// Point the capture screen at a student, clearing stale pipeline state
    pub fn enter(&mut self, student_id: i64, student_name: &str) {
        if self.student_id != student_id {
            *self = Self::new();
            self.student_id = student_id;
        }
        self.student_name = student_name.to_string();
    }

    /// Drop review payload and textures, back to an idle camera
    pub fn reset(&mut self) {
        self.phase = CapturePhase::Idle;
        self.review = None;
        self.original_tex = None;
        self.overlay_tex = None;
        self.events_rx = None;
    }
}

pub struct ImportState {
    pub student_id: i64,
    pub student_name: String,
    /// One file path per line
    pub paths_input: String,
    pub running: bool,
    pub outcomes: Vec<ImportOutcome>,
    pub error: Option<String>,
    pub rx: Option<Receiver<ImportOutcome>>,
}

impl ImportState {
    pub fn new() -> Self {
        Self {
            student_id: 0,
            student_name: String::new(),
            paths_input: String::new(),
            running: false,
            outcomes: Vec::new(),
            error: None,
            rx: None,
        }
    }

    pub fn enter(&mut self, student_id: i64, student_name: &str) {
        if self.student_id != student_id {
            *self = Self::new();
            self.student_id = student_id;
        }
        self.student_name = student_name.to_string();
    }

    pub fn selected_paths(&self) -> Vec<String> {
        self.paths_input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn successes(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failure()).count()
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }
}

impl AppState {
    /// Kick off capture → upload → analyze for the typed file path
    pub fn start_capture(&mut self) {
        if self.capture.phase.is_busy() {
            return;
        }
        self.capture.error = None;
        self.capture.phase = CapturePhase::Capturing;

        let api = self.api.clone();
        let path = self.capture.path_input.clone();
        let student_id = self.capture.student_id;
        let student_name = self.capture.student_name.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let bytes = match images::load_image_file(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    let _ = tx.send(CaptureEvent::Finished(Box::new(Err(e))));
                    return;
                }
            };
            let progress_tx = tx.clone();
            let result = capture_and_analyze(&api, student_id, &student_name, bytes, |phase| {
                let _ = progress_tx.send(CaptureEvent::Phase(phase));
            });
            let _ = tx.send(CaptureEvent::Finished(Box::new(
                result.map_err(|e| e.to_string()),
            )));
        });
        self.capture.events_rx = Some(rx);
    }

    pub(super) fn poll_capture(&mut self) {
        let Some(rx) = self.capture.events_rx.take() else {
            return;
        };
        loop {
            match rx.try_recv() {
                Ok(CaptureEvent::Phase(phase)) => self.capture.phase = phase,
                Ok(CaptureEvent::Finished(result)) => {
                    let on_capture_screen = matches!(
                        self.nav.current(),
                        Route::Capture { student_id, .. } if *student_id == self.capture.student_id
                    );
                    match *result {
                        Ok(review) if on_capture_screen => {
                            info!(photo_id = review.photo_id, "capture analyzed, reviewing");
                            let photo_id = review.photo_id;
                            self.capture.phase = CapturePhase::Reviewing;
                            self.capture.review = Some(review);
                            self.capture.original_tex = None;
                            self.capture.overlay_tex = None;
                            self.nav.replace(Route::PhotoReview { photo_id });
                        }
                        Ok(_) => {
                            // Screen dismissed mid-flight; the record exists
                            // server-side and the detail view will pick it up
                            self.capture.reset();
                            self.detail.dirty = true;
                        }
                        Err(message) => {
                            self.capture.phase = CapturePhase::Idle;
                            if on_capture_screen {
                                self.capture.error = Some(message);
                            }
                        }
                    }
                    return;
                }
                Err(TryRecvError::Empty) => {
                    self.capture.events_rx = Some(rx);
                    return;
                }
                Err(TryRecvError::Disconnected) => return,
            }
        }
    }

    /// Run the gallery batch import over the listed file paths
    pub fn start_import(&mut self) {
        if self.import.running {
            return;
        }
        let paths = self.import.selected_paths();
        if paths.is_empty() {
            self.import.error = Some("No photos selected".to_string());
            return;
        }
        self.import.error = None;
        self.import.outcomes.clear();
        self.import.running = true;

        let api = self.api.clone();
        let student_id = self.import.student_id;
        let student_name = self.import.student_name.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let sources = paths
                .into_iter()
                .map(|path| match images::load_image_file(&path) {
                    Ok(bytes) => ImportSource::new(path, bytes),
                    Err(e) => ImportSource::unreadable(path, e),
                })
                .collect();
            import_batch(&api, student_id, &student_name, sources, |outcome| {
                let _ = tx.send(outcome);
            });
        });
        self.import.rx = Some(rx);
    }

    pub(super) fn poll_import(&mut self) {
        let Some(rx) = self.import.rx.take() else {
            return;
        };
        loop {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.import.outcomes.push(outcome);
                    // Imported photos belong to the detail lists too
                    self.detail.dirty = true;
                }
                Err(TryRecvError::Empty) => {
                    self.import.rx = Some(rx);
                    return;
                }
                Err(TryRecvError::Disconnected) => {
                    self.import.running = false;
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_paths_skips_blank_lines() {
        let mut import = ImportState::new();
        import.paths_input = "/a.jpg\n\n  /b.jpg  \n".to_string();
        assert_eq!(import.selected_paths(), vec!["/a.jpg", "/b.jpg"]);
    }

    #[test]
    fn test_enter_preserves_state_for_same_student() {
        let mut capture = CaptureState::new();
        capture.enter(7, "Maria");
        capture.path_input = "/frame.jpg".to_string();
        capture.enter(7, "Maria");
        assert_eq!(capture.path_input, "/frame.jpg");

        capture.enter(8, "Ion");
        assert!(capture.path_input.is_empty());
    }

    #[test]
    fn test_outcome_counters() {
        let mut import = ImportState::new();
        import.outcomes.push(ImportOutcome::Failed {
            index: 0,
            file_name: "a.jpg".to_string(),
            message: "boom".to_string(),
        });
        assert_eq!(import.failures(), 1);
        assert_eq!(import.successes(), 0);
    }
}
