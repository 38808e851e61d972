//! Session Data Structure
//!
//! A therapy session recorded per student. Session dates travel as ISO
//! `YYYY-MM-DD`; the edit form accepts `DD-MM-YYYY` and converts before
//! submission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::ApiError;

/// Display format used by the session forms
pub const SESSION_DATE_FORMAT: &str = "%d-%m-%Y";

/// Kind of therapy session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Evaluare,
    Consolidare,
    Corectie,
}

impl SessionType {
    /// All selectable session types, in form order
    pub const ALL: [SessionType; 3] = [
        SessionType::Evaluare,
        SessionType::Consolidare,
        SessionType::Corectie,
    ];

    /// Human-readable label for the form buttons
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Evaluare => "Evaluare",
            SessionType::Consolidare => "Consolidare",
            SessionType::Corectie => "Corecție",
        }
    }
}

impl Default for SessionType {
    fn default() -> Self {
        SessionType::Evaluare
    }
}

/// A session record as the backend returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Unique session ID
    pub id: i64,
    /// Owning student; immutable after creation
    pub student_id: i64,
    /// Day the session took place
    pub session_date: NaiveDate,
    /// Kind of session
    pub session_type: SessionType,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

/// Body for `POST /sessions` and `PUT /sessions/:id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    pub session_date: NaiveDate,
    pub session_type: SessionType,
    pub notes: String,
}

impl SessionPayload {
    /// Parse a `DD-MM-YYYY` form input into a wire date.
    ///
    /// Rejects both malformed strings and impossible calendar dates.
    pub fn parse_form_date(input: &str) -> Result<NaiveDate, ApiError> {
        NaiveDate::parse_from_str(input.trim(), SESSION_DATE_FORMAT).map_err(|_| {
            ApiError::validation("session_date", "Date must be in DD-MM-YYYY format")
        })
    }
}

impl From<&Session> for SessionPayload {
    fn from(s: &Session) -> Self {
        Self {
            student_id: None,
            session_date: s.session_date,
            session_type: s.session_type,
            notes: s.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&SessionType::Corectie).unwrap(),
            "\"corectie\""
        );
        let t: SessionType = serde_json::from_str("\"evaluare\"").unwrap();
        assert_eq!(t, SessionType::Evaluare);
    }

    #[test]
    fn test_parse_form_date() {
        let date = SessionPayload::parse_form_date("05-05-2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap());
    }

    #[test]
    fn test_parse_form_date_rejects_iso() {
        assert!(SessionPayload::parse_form_date("2025-05-05").is_err());
    }

    #[test]
    fn test_parse_form_date_rejects_impossible_day() {
        assert!(SessionPayload::parse_form_date("31-02-2025").is_err());
        assert!(SessionPayload::parse_form_date("99-99-9999").is_err());
    }

    #[test]
    fn test_session_date_serializes_iso() {
        let payload = SessionPayload {
            student_id: Some(1),
            session_date: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
            session_type: SessionType::Consolidare,
            notes: "exerciții".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["session_date"], "2025-05-05");
        assert_eq!(json["session_type"], "consolidare");
    }
}
