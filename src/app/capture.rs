//! Capture Pipeline
//!
//! Orchestrates photo capture, upload, remote analysis, and user review as an
//! explicit two-phase commit:
//!
//! - **reserve** - `POST /photos/upload` stores the image and returns an id
//! - **confirm** - `POST /posture/:id/analyze` produces angles + overlay
//! - **rollback** - on any confirm failure, a best-effort
//!   `DELETE /photos/:id` so no photo record persists without an analysis
//!
//! A failed rollback is logged and swallowed; the user already sees the
//! primary analysis error. There is no retry policy: every failure returns
//! the pipeline to idle and the user re-triggers capture manually.
//!
//! The gallery batch import runs the same two phases per image, strictly
//! sequentially, and a failure on one image never aborts the batch.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{error, info, warn};

use crate::app::api::ApiClient;
use crate::shared::error::ApiError;
use crate::shared::model::{PostureAnalysis, TiltAngles};

/// Where the pipeline currently is; drives the busy indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Capturing,
    Uploading,
    Analyzing,
    Reviewing,
}

impl CapturePhase {
    /// Label shown next to the spinner while the pipeline is busy
    pub fn label(&self) -> &'static str {
        match self {
            CapturePhase::Idle => "Ready",
            CapturePhase::Capturing => "Capturing frame...",
            CapturePhase::Uploading => "Uploading photo...",
            CapturePhase::Analyzing => "Analyzing posture...",
            CapturePhase::Reviewing => "Review",
        }
    }

    /// Whether capture controls must be disabled
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            CapturePhase::Capturing | CapturePhase::Uploading | CapturePhase::Analyzing
        )
    }
}

/// Everything the review screen needs to render a finished analysis
#[derive(Debug, Clone)]
pub struct ReviewData {
    pub student_id: i64,
    pub student_name: String,
    pub photo_id: i64,
    /// The captured frame, as read from disk
    pub original: Vec<u8>,
    pub angles: TiltAngles,
    /// Decoded overlay image bytes, when the backend produced one we could
    /// resolve
    pub overlay: Option<Vec<u8>>,
    pub analysis: PostureAnalysis,
}

/// Run one image through reserve → confirm, rolling back the reserved photo
/// if the analysis fails.
///
/// `progress` receives phase transitions so the UI can narrate the busy
/// indicator; it is called from the worker thread.
pub fn capture_and_analyze(
    api: &ApiClient,
    student_id: i64,
    student_name: &str,
    image: Vec<u8>,
    mut progress: impl FnMut(CapturePhase),
) -> Result<ReviewData, ApiError> {
    progress(CapturePhase::Uploading);
    let photo_id = api.upload_photo(student_id, &image)?;
    info!(photo_id, student_id, "photo uploaded, requesting analysis");

    progress(CapturePhase::Analyzing);
    match api.analyze_posture(photo_id, &image) {
        Ok(response) => {
            let overlay = resolve_overlay(api, &response.overlay);
            progress(CapturePhase::Reviewing);
            Ok(ReviewData {
                student_id,
                student_name: student_name.to_string(),
                photo_id,
                original: image,
                angles: response.angles,
                overlay,
                analysis: response.posture,
            })
        }
        Err(err) => {
            // Rollback: the uploaded photo must not outlive its failed
            // analysis. Best effort only.
            if let Err(cleanup) = api.delete_photo(photo_id) {
                let compensation = ApiError::orphan_compensation(photo_id, cleanup);
                error!(%compensation, "orphan cleanup failed");
            } else {
                info!(photo_id, "orphaned photo removed after failed analysis");
            }
            progress(CapturePhase::Idle);
            Err(err)
        }
    }
}

/// The analyze response carries the overlay either as inline base64 (possibly
/// with a data-URL prefix) or as a server path. Unresolvable overlays are
/// logged and dropped; the review screen still shows the angles.
fn resolve_overlay(api: &ApiClient, overlay: &str) -> Option<Vec<u8>> {
    let trimmed = overlay.trim();
    if trimmed.is_empty() {
        return None;
    }

    let payload = trimmed
        .strip_prefix("data:image/jpeg;base64,")
        .or_else(|| trimmed.strip_prefix("data:image/png;base64,"))
        .unwrap_or(trimmed);

    if let Ok(bytes) = BASE64.decode(payload) {
        return Some(bytes);
    }

    match api.fetch_overlay(trimmed) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            warn!(%err, "could not resolve overlay reference");
            None
        }
    }
}

/// One image queued for batch import. `bytes` carries a read failure when
/// the selected file could not be loaded; the batch records it as a failed
/// entry and keeps going.
#[derive(Debug, Clone)]
pub struct ImportSource {
    pub file_name: String,
    pub bytes: Result<Vec<u8>, String>,
}

impl ImportSource {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: Ok(bytes),
        }
    }

    pub fn unreadable(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: Err(message.into()),
        }
    }
}

/// Per-image outcome of a batch import, in selection order
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    Analyzed {
        index: usize,
        file_name: String,
        review: ReviewData,
    },
    Failed {
        index: usize,
        file_name: String,
        message: String,
    },
}

impl ImportOutcome {
    pub fn index(&self) -> usize {
        match self {
            ImportOutcome::Analyzed { index, .. } | ImportOutcome::Failed { index, .. } => *index,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ImportOutcome::Failed { .. })
    }
}

/// Process the selection strictly sequentially, reporting each outcome as it
/// completes. A failing image is recorded and the loop moves on; ordering of
/// outcomes matches the input selection.
pub fn import_batch(
    api: &ApiClient,
    student_id: i64,
    student_name: &str,
    sources: Vec<ImportSource>,
    mut on_outcome: impl FnMut(ImportOutcome),
) {
    for (index, source) in sources.into_iter().enumerate() {
        let bytes = match source.bytes {
            Ok(bytes) => bytes,
            Err(message) => {
                warn!(index, %message, "batch image unreadable");
                on_outcome(ImportOutcome::Failed {
                    index,
                    file_name: source.file_name,
                    message,
                });
                continue;
            }
        };
        let outcome = match capture_and_analyze(api, student_id, student_name, bytes, |_phase| {})
        {
            Ok(review) => ImportOutcome::Analyzed {
                index,
                file_name: source.file_name,
                review,
            },
            Err(err) => {
                warn!(index, %err, "batch image failed");
                ImportOutcome::Failed {
                    index,
                    file_name: source.file_name,
                    message: err.to_string(),
                }
            }
        };
        on_outcome(outcome);
    }
}
