//! Posture Analysis Data Structures
//!
//! Results of the backend's posture analysis: a tilt-angle triple plus an
//! overlay image. Analyses are immutable once created; a photo accumulates a
//! history of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Soft warning threshold in degrees. Angles beyond this are highlighted in
/// the UI but never rejected.
pub const HIGH_DEVIATION_DEG: f32 = 15.0;

/// The three tilt angles, in degrees, deviation from horizontal/vertical
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TiltAngles {
    pub shoulder_tilt: f32,
    pub hip_tilt: f32,
    pub spine_tilt: f32,
}

impl TiltAngles {
    /// Whether a single angle exceeds the soft warning threshold
    pub fn exceeds(value: f32) -> bool {
        value.abs() > HIGH_DEVIATION_DEG
    }

    /// Per-axis high-deviation flags: shoulder, hip, spine
    pub fn high_axes(&self) -> [bool; 3] {
        [
            Self::exceeds(self.shoulder_tilt),
            Self::exceeds(self.hip_tilt),
            Self::exceeds(self.spine_tilt),
        ]
    }

    /// Whether any axis exceeds the threshold
    pub fn any_high(&self) -> bool {
        self.high_axes().iter().any(|flag| *flag)
    }
}

/// A stored posture-analysis record, one of possibly many per photo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostureAnalysis {
    /// Unique analysis ID
    pub id: i64,
    /// The photo this analysis belongs to
    pub photo_id: i64,
    /// Shoulder deviation in degrees
    pub shoulder_tilt: f32,
    /// Hip deviation in degrees
    pub hip_tilt: f32,
    /// Spine deviation in degrees
    pub spine_tilt: f32,
    /// Server path of the overlay image, when the backend stored one
    #[serde(default)]
    pub overlay_uri: Option<String>,
    /// When the analysis ran
    pub created_at: DateTime<Utc>,
}

impl PostureAnalysis {
    /// The angle triple of this record
    pub fn angles(&self) -> TiltAngles {
        TiltAngles {
            shoulder_tilt: self.shoulder_tilt,
            hip_tilt: self.hip_tilt,
            spine_tilt: self.spine_tilt,
        }
    }
}

/// Response of `POST /posture/:photoId/analyze`
///
/// `overlay` is either inline base64-encoded image data or a server path to
/// the generated overlay; callers try to decode first and fall back to a
/// fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeResponse {
    /// The stored analysis entity
    pub posture: PostureAnalysis,
    /// The angle triple
    pub angles: TiltAngles,
    /// Inline overlay data or server path
    pub overlay: String,
}
