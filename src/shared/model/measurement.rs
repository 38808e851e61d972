//! Measurement Data Structure
//!
//! Anthropometric measurements recorded per student. Height and weight are
//! mandatory; the circumference fields and the physical-disability note are
//! optional and serialize as `null` when absent, matching the backend schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::ApiError;

/// A measurement record as the backend returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Unique measurement ID
    pub id: i64,
    /// Owning student; immutable after creation
    pub student_id: i64,
    /// Height in cm
    pub height: f32,
    /// Weight in kg
    pub weight: f32,
    /// Head circumference in cm
    pub head_circumference: Option<f32>,
    /// Chest circumference in cm
    pub chest_circumference: Option<f32>,
    /// Abdominal circumference in cm
    pub abdominal_circumference: Option<f32>,
    /// Physical disability note, e.g. "scolioză"
    pub physical_disability: Option<String>,
    /// When the measurement was recorded
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /measurements` and `PUT /measurements/:id`
///
/// `student_id` is only sent on creation; the owner of an existing
/// measurement cannot change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeasurementPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    pub height: f32,
    pub weight: f32,
    pub head_circumference: Option<f32>,
    pub chest_circumference: Option<f32>,
    pub abdominal_circumference: Option<f32>,
    pub physical_disability: Option<String>,
}

impl MeasurementPayload {
    /// Required fields: height and weight, both strictly positive.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ApiError::validation(
                "height",
                "Height must be a positive number",
            ));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ApiError::validation(
                "weight",
                "Weight must be a positive number",
            ));
        }
        Ok(())
    }
}

impl From<&Measurement> for MeasurementPayload {
    fn from(m: &Measurement) -> Self {
        Self {
            student_id: None,
            height: m.height,
            weight: m.weight,
            head_circumference: m.head_circumference,
            chest_circumference: m.chest_circumference,
            abdominal_circumference: m.abdominal_circumference,
            physical_disability: m.physical_disability.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> MeasurementPayload {
        MeasurementPayload {
            student_id: Some(7),
            height: 120.0,
            weight: 25.0,
            head_circumference: Some(50.0),
            chest_circumference: Some(60.0),
            abdominal_circumference: Some(55.0),
            physical_disability: Some("scolioză".to_string()),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_missing_height_or_weight_rejected() {
        let mut payload = valid();
        payload.height = 0.0;
        assert!(payload.validate().is_err());

        let mut payload = valid();
        payload.weight = -1.0;
        assert!(payload.validate().is_err());

        let mut payload = valid();
        payload.height = f32::NAN;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_student_id_omitted_on_update() {
        let mut payload = valid();
        payload.student_id = None;
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("student_id").is_none());
        assert_eq!(json["height"], 120.0);
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let payload = valid();
        let json = serde_json::to_string(&payload).unwrap();
        let back: MeasurementPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_measurement_deserializes_nulls() {
        let m: Measurement = serde_json::from_str(
            r#"{
                "id": 3, "student_id": 7, "height": 118.5, "weight": 24.0,
                "head_circumference": null, "chest_circumference": null,
                "abdominal_circumference": null, "physical_disability": null,
                "created_at": "2025-05-05T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(m.head_circumference, None);
        assert_eq!(m.physical_disability, None);
    }
}
