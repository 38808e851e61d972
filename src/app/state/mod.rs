//! Central application state shared across egui views.
//!
//! Every network operation follows the same shape: a worker thread runs one
//! blocking API call and sends the result over an mpsc channel; the state
//! polls its receivers once per frame. Navigating away drops the receiver,
//! so a late response is a no-op by construction.

use std::sync::mpsc::{channel, Receiver};

use tracing::{error, warn};

use crate::app::api::ApiClient;
use crate::app::config::Config;
use crate::app::nav::{NavStack, Route};
use crate::shared::error::ApiError;
use crate::shared::model::Student;

pub mod capture_state;
pub mod detail;
pub mod forms;

pub use capture_state::{CaptureEvent, CaptureState, ImportState};
pub use detail::{DeleteTarget, DetailState};
pub use forms::{MeasurementFormState, SessionFormState, StudentFormState};

/// State of the root student list screen
pub struct StudentListState {
    pub items: Vec<Student>,
    /// Full-screen spinner, first mount only
    pub loading: bool,
    /// Set after a mutation elsewhere; triggers a silent refetch on focus
    pub dirty: bool,
    pub loaded_once: bool,
    pub error: Option<String>,
    pub rx: Option<Receiver<Result<Vec<Student>, ApiError>>>,
}

impl StudentListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            dirty: true,
            loaded_once: false,
            error: None,
            rx: None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.rx.is_some()
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub nav: NavStack,
    pub students: StudentListState,
    pub student_form: StudentFormState,
    pub measurement_form: MeasurementFormState,
    pub session_form: SessionFormState,
    pub detail: DetailState,
    pub capture: CaptureState,
    pub import: ImportState,
    /// Item awaiting the user's confirm in the delete dialog
    pub pending_delete: Option<DeleteTarget>,
    delete_in_flight: Option<(DeleteTarget, Receiver<Result<(), ApiError>>)>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(config.clone());
        Self {
            config,
            api,
            nav: NavStack::new(),
            students: StudentListState::new(),
            student_form: StudentFormState::new(),
            measurement_form: MeasurementFormState::new(),
            session_form: SessionFormState::new(),
            detail: DetailState::new(),
            capture: CaptureState::new(),
            import: ImportState::new(),
            pending_delete: None,
            delete_in_flight: None,
        }
    }

    /// Poll every in-flight operation once per frame
    pub fn poll_results(&mut self) {
        self.poll_students();
        self.poll_delete();
        self.poll_student_form();
        self.poll_measurement_form();
        self.poll_session_form();
        self.poll_detail();
        self.poll_capture();
        self.poll_import();
    }

    // --- student list ---

    /// Fetch the student list. `silent` keeps the current items on screen
    /// instead of showing the full-screen spinner.
    pub fn refresh_students(&mut self, silent: bool) {
        if self.students.is_fetching() {
            return;
        }
        self.students.loading = !silent && !self.students.loaded_once;
        self.students.dirty = false;
        self.students.error = None;

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.list_students());
        });
        self.students.rx = Some(rx);
    }

    fn poll_students(&mut self) {
        if let Some(ref rx) = self.students.rx {
            if let Ok(result) = rx.try_recv() {
                self.students.rx = None;
                self.students.loading = false;
                match result {
                    Ok(items) => {
                        self.students.items = items;
                        self.students.loaded_once = true;
                    }
                    Err(e) => self.students.error = Some(e.to_string()),
                }
            }
        }
    }

    // --- delete (confirm → delete → silent refetch) ---

    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.pending_delete = Some(target);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) {
        let Some(target) = self.pending_delete.take() else {
            return;
        };
        let api = self.api.clone();
        let job = target.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match job {
                DeleteTarget::Student { id, .. } => api.delete_student(id),
                DeleteTarget::Measurement { id } => api.delete_measurement(id),
                DeleteTarget::Session { id } => api.delete_session(id),
                DeleteTarget::Photo { id } => api.delete_photo(id),
            };
            let _ = tx.send(result);
        });
        self.delete_in_flight = Some((target, rx));
    }

    pub fn delete_running(&self) -> bool {
        self.delete_in_flight.is_some()
    }

    fn poll_delete(&mut self) {
        let Some((target, rx)) = self.delete_in_flight.take() else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                match result {
                    Ok(()) => match target {
                        DeleteTarget::Student { .. } => self.refresh_students(true),
                        _ => self.detail.dirty = true,
                    },
                    Err(e) => {
                        warn!(%e, "delete failed");
                        match target {
                            DeleteTarget::Student { .. } => {
                                self.students.error = Some(e.to_string())
                            }
                            _ => self.detail.error = Some(e.to_string()),
                        }
                    }
                }
            }
            Err(_) => self.delete_in_flight = Some((target, rx)),
        }
    }

    // --- navigation helpers ---

    pub fn open_add_student(&mut self) {
        self.student_form.load_new();
        self.nav.push(Route::AddStudent);
    }

    pub fn open_edit_student(&mut self, student: &Student) {
        self.student_form.load_edit(student);
        self.nav.push(Route::EditStudent {
            student: student.clone(),
        });
    }

    pub fn open_student_detail(&mut self, student_id: i64, student_name: &str) {
        self.detail.enter(student_id, student_name);
        self.nav.push(Route::StudentDetail {
            student_id,
            student_name: student_name.to_string(),
        });
    }

    /// Accept the reviewed capture and land on the student's detail screen
    pub fn review_accept(&mut self) {
        let Some(review) = self.capture.review.take() else {
            return;
        };
        self.capture.reset();
        self.detail.enter(review.student_id, &review.student_name);
        self.detail.dirty = true;
        self.nav.pop_to_top();
        self.nav.push(Route::StudentDetail {
            student_id: review.student_id,
            student_name: review.student_name,
        });
    }

    /// Discard the reviewed capture and return to the capture screen for the
    /// same student. The uploaded photo and its analysis are removed
    /// server-side, best effort; a discarded capture must not show up in the
    /// student's photo list.
    pub fn review_retake(&mut self) {
        let Some(review) = self.capture.review.take() else {
            return;
        };
        self.capture.reset();

        let api = self.api.clone();
        let photo_id = review.photo_id;
        std::thread::spawn(move || {
            if let Err(e) = api.delete_photo(photo_id) {
                let compensation = ApiError::orphan_compensation(photo_id, e);
                error!(%compensation, "discard cleanup failed");
            }
        });

        self.nav.replace(Route::Capture {
            student_id: review.student_id,
            student_name: review.student_name,
        });
    }
}
