//! Photo Data Structure
//!
//! A posture photo uploaded for a student. The list endpoint may embed the
//! newest analysis so the detail screen can show angles without an extra
//! round trip; the full history is fetched on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::posture::PostureAnalysis;

/// A photo record as the backend returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    /// Unique photo ID
    pub id: i64,
    /// Owning student; immutable after creation
    pub student_id: i64,
    /// Server path of the stored image
    pub uri: String,
    /// When the photo was uploaded
    pub created_at: DateTime<Utc>,
    /// Newest analysis, when the backend embeds it
    #[serde(default)]
    pub latest_analysis: Option<PostureAnalysis>,
}

/// Response of `POST /photos/upload`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadPhotoResponse {
    /// ID of the stored photo
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_without_analysis() {
        let photo: Photo = serde_json::from_str(
            r#"{
                "id": 4, "student_id": 7,
                "uri": "/uploads/4.jpg",
                "created_at": "2025-06-01T09:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(photo.latest_analysis.is_none());
    }

    #[test]
    fn test_photo_with_embedded_analysis() {
        let photo: Photo = serde_json::from_str(
            r#"{
                "id": 4, "student_id": 7,
                "uri": "/uploads/4.jpg",
                "created_at": "2025-06-01T09:00:00Z",
                "latest_analysis": {
                    "id": 11, "photo_id": 4,
                    "shoulder_tilt": 18.2, "hip_tilt": 5.0, "spine_tilt": 3.1,
                    "created_at": "2025-06-01T09:30:00Z"
                }
            }"#,
        )
        .unwrap();
        let analysis = photo.latest_analysis.unwrap();
        assert_eq!(analysis.photo_id, 4);
        assert!(analysis.angles().any_high());
    }

    #[test]
    fn test_upload_response() {
        let response: UploadPhotoResponse = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(response.id, 42);
    }
}
