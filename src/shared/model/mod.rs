//! Wire models for the posture backend.
//!
//! The canonical wire schema is snake_case JSON; every type here serializes
//! exactly as the backend expects it. Request payload types live next to the
//! entity they create and carry their own client-side validation, which runs
//! before any network call.

pub mod measurement;
pub mod photo;
pub mod posture;
pub mod session;
pub mod student;

pub use measurement::{Measurement, MeasurementPayload};
pub use photo::{Photo, UploadPhotoResponse};
pub use posture::{AnalyzeResponse, PostureAnalysis, TiltAngles, HIGH_DEVIATION_DEG};
pub use session::{Session, SessionPayload, SessionType};
pub use student::{Student, StudentPayload};
