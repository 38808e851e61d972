//! Student Data Structure
//!
//! A student is the root entity; measurements, sessions, and photos all hang
//! off a student id that never changes after creation.

use serde::{Deserialize, Serialize};

use crate::shared::error::ApiError;

/// A student as the backend returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    /// Unique student ID
    pub id: i64,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Diagnosed condition (free text)
    #[serde(default)]
    pub condition: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

/// Body for `POST /students` and `PUT /students/:id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentPayload {
    pub name: String,
    pub age: i32,
    pub condition: String,
    pub notes: String,
}

impl StudentPayload {
    /// Required fields: name and age. Runs before any network call.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("name", "Name is required"));
        }
        if self.age <= 0 {
            return Err(ApiError::validation("age", "Age must be a positive number"));
        }
        Ok(())
    }
}

impl From<&Student> for StudentPayload {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            age: student.age,
            condition: student.condition.clone(),
            notes: student.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> StudentPayload {
        StudentPayload {
            name: "Maria Ionescu".to_string(),
            age: 9,
            condition: "scolioză".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut payload = valid();
        payload.name = "   ".to_string();
        let err = payload.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_nonpositive_age_rejected() {
        let mut payload = valid();
        payload.age = 0;
        assert!(payload.validate().is_err());
        payload.age = -3;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_wire_shape_is_snake_case() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["name"], "Maria Ionescu");
        assert_eq!(json["age"], 9);
        assert!(json.get("condition").is_some());
        assert!(json.get("notes").is_some());
    }

    #[test]
    fn test_student_deserializes_without_optional_text() {
        let student: Student =
            serde_json::from_str(r#"{"id": 1, "name": "Ion", "age": 10}"#).unwrap();
        assert_eq!(student.condition, "");
        assert_eq!(student.notes, "");
    }
}
