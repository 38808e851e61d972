//! Form state for the Student / Measurement / Session add+edit screens.
//!
//! Each form keeps raw string inputs, converts them into a validated wire
//! payload on submit, and blocks submission with an inline error before any
//! network call. On a failed submit the inputs stay populated.

use std::sync::mpsc::{channel, Receiver};

use chrono::Local;

use super::AppState;
use crate::shared::error::ApiError;
use crate::shared::model::{
    Measurement, MeasurementPayload, Session, SessionPayload, SessionType, Student,
    StudentPayload, session::SESSION_DATE_FORMAT,
};

fn parse_required_f32(field: &str, input: &str) -> Result<f32, ApiError> {
    input
        .trim()
        .parse::<f32>()
        .map_err(|_| ApiError::validation(field, format!("{} must be a number", field)))
}

fn parse_optional_f32(field: &str, input: &str) -> Result<Option<f32>, ApiError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_required_f32(field, trimmed).map(Some)
}

// --- student form ---

pub struct StudentFormState {
    /// Id of the record being edited; `None` means the add variant
    pub editing: Option<i64>,
    pub name: String,
    pub age: String,
    pub condition: String,
    pub notes: String,
    pub error: Option<String>,
    pub saving: bool,
    pub rx: Option<Receiver<Result<Student, ApiError>>>,
}

impl StudentFormState {
    pub fn new() -> Self {
        Self {
            editing: None,
            name: String::new(),
            age: String::new(),
            condition: String::new(),
            notes: String::new(),
            error: None,
            saving: false,
            rx: None,
        }
    }

    pub fn load_new(&mut self) {
        *self = Self::new();
    }

    pub fn load_edit(&mut self, student: &Student) {
        *self = Self::new();
        self.editing = Some(student.id);
        self.name = student.name.clone();
        self.age = student.age.to_string();
        self.condition = student.condition.clone();
        self.notes = student.notes.clone();
    }

    pub fn payload(&self) -> Result<StudentPayload, ApiError> {
        let age = self
            .age
            .trim()
            .parse::<i32>()
            .map_err(|_| ApiError::validation("age", "Age must be a whole number"))?;
        let payload = StudentPayload {
            name: self.name.trim().to_string(),
            age,
            condition: self.condition.trim().to_string(),
            notes: self.notes.trim().to_string(),
        };
        payload.validate()?;
        Ok(payload)
    }
}

// --- measurement form ---

pub struct MeasurementFormState {
    pub student_id: i64,
    pub editing: Option<i64>,
    pub height: String,
    pub weight: String,
    pub head_circumference: String,
    pub chest_circumference: String,
    pub abdominal_circumference: String,
    pub physical_disability: String,
    pub error: Option<String>,
    pub saving: bool,
    pub rx: Option<Receiver<Result<Measurement, ApiError>>>,
}

impl MeasurementFormState {
    pub fn new() -> Self {
        Self {
            student_id: 0,
            editing: None,
            height: String::new(),
            weight: String::new(),
            head_circumference: String::new(),
            chest_circumference: String::new(),
            abdominal_circumference: String::new(),
            physical_disability: String::new(),
            error: None,
            saving: false,
            rx: None,
        }
    }

    pub fn load_new(&mut self, student_id: i64) {
        *self = Self::new();
        self.student_id = student_id;
    }

    pub fn load_edit(&mut self, m: &Measurement) {
        *self = Self::new();
        self.student_id = m.student_id;
        self.editing = Some(m.id);
        self.height = m.height.to_string();
        self.weight = m.weight.to_string();
        self.head_circumference = m.head_circumference.map(|v| v.to_string()).unwrap_or_default();
        self.chest_circumference = m.chest_circumference.map(|v| v.to_string()).unwrap_or_default();
        self.abdominal_circumference = m
            .abdominal_circumference
            .map(|v| v.to_string())
            .unwrap_or_default();
        self.physical_disability = m.physical_disability.clone().unwrap_or_default();
    }

    pub fn payload(&self) -> Result<MeasurementPayload, ApiError> {
        let disability = self.physical_disability.trim();
        let payload = MeasurementPayload {
            // student_id only travels on creation; the owner is immutable
            student_id: self.editing.is_none().then_some(self.student_id),
            height: parse_required_f32("height", &self.height)?,
            weight: parse_required_f32("weight", &self.weight)?,
            head_circumference: parse_optional_f32("head_circumference", &self.head_circumference)?,
            chest_circumference: parse_optional_f32(
                "chest_circumference",
                &self.chest_circumference,
            )?,
            abdominal_circumference: parse_optional_f32(
                "abdominal_circumference",
                &self.abdominal_circumference,
            )?,
            physical_disability: (!disability.is_empty()).then(|| disability.to_string()),
        };
        payload.validate()?;
        Ok(payload)
    }
}

// --- session form ---

pub struct SessionFormState {
    pub student_id: i64,
    pub editing: Option<i64>,
    /// DD-MM-YYYY, converted to ISO on submit
    pub date_input: String,
    pub session_type: SessionType,
    pub notes: String,
    pub error: Option<String>,
    pub saving: bool,
    pub rx: Option<Receiver<Result<Session, ApiError>>>,
}

impl SessionFormState {
    pub fn new() -> Self {
        Self {
            student_id: 0,
            editing: None,
            date_input: String::new(),
            session_type: SessionType::default(),
            notes: String::new(),
            error: None,
            saving: false,
            rx: None,
        }
    }

    pub fn load_new(&mut self, student_id: i64) {
        *self = Self::new();
        self.student_id = student_id;
        self.date_input = Local::now()
            .date_naive()
            .format(SESSION_DATE_FORMAT)
            .to_string();
    }

    pub fn load_edit(&mut self, session: &Session) {
        *self = Self::new();
        self.student_id = session.student_id;
        self.editing = Some(session.id);
        self.date_input = session.session_date.format(SESSION_DATE_FORMAT).to_string();
        self.session_type = session.session_type;
        self.notes = session.notes.clone();
    }

    pub fn payload(&self) -> Result<SessionPayload, ApiError> {
        let session_date = SessionPayload::parse_form_date(&self.date_input)?;
        Ok(SessionPayload {
            student_id: self.editing.is_none().then_some(self.student_id),
            session_date,
            session_type: self.session_type,
            notes: self.notes.trim().to_string(),
        })
    }
}

// --- submit + poll orchestration ---

impl AppState {
    pub fn submit_student_form(&mut self) {
        if self.student_form.saving {
            return;
        }
        let payload = match self.student_form.payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.student_form.error = Some(e.to_string());
                return;
            }
        };
        self.student_form.error = None;
        self.student_form.saving = true;

        let api = self.api.clone();
        let editing = self.student_form.editing;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match editing {
                Some(id) => api.update_student(id, &payload),
                None => api.add_student(&payload),
            };
            let _ = tx.send(result);
        });
        self.student_form.rx = Some(rx);
    }

    pub(super) fn poll_student_form(&mut self) {
        if let Some(ref rx) = self.student_form.rx {
            if let Ok(result) = rx.try_recv() {
                self.student_form.rx = None;
                self.student_form.saving = false;
                match result {
                    Ok(_) => {
                        self.students.dirty = true;
                        self.detail.dirty = true;
                        self.nav.pop();
                    }
                    Err(e) => self.student_form.error = Some(e.to_string()),
                }
            }
        }
    }

    pub fn submit_measurement_form(&mut self) {
        if self.measurement_form.saving {
            return;
        }
        let payload = match self.measurement_form.payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.measurement_form.error = Some(e.to_string());
                return;
            }
        };
        self.measurement_form.error = None;
        self.measurement_form.saving = true;

        let api = self.api.clone();
        let editing = self.measurement_form.editing;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match editing {
                Some(id) => api.update_measurement(id, &payload),
                None => api.add_measurement(&payload),
            };
            let _ = tx.send(result);
        });
        self.measurement_form.rx = Some(rx);
    }

    pub(super) fn poll_measurement_form(&mut self) {
        if let Some(ref rx) = self.measurement_form.rx {
            if let Ok(result) = rx.try_recv() {
                self.measurement_form.rx = None;
                self.measurement_form.saving = false;
                match result {
                    Ok(_) => {
                        self.detail.dirty = true;
                        self.nav.pop();
                    }
                    Err(e) => self.measurement_form.error = Some(e.to_string()),
                }
            }
        }
    }

    pub fn submit_session_form(&mut self) {
        if self.session_form.saving {
            return;
        }
        let payload = match self.session_form.payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.session_form.error = Some(e.to_string());
                return;
            }
        };
        self.session_form.error = None;
        self.session_form.saving = true;

        let api = self.api.clone();
        let editing = self.session_form.editing;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match editing {
                Some(id) => api.update_session(id, &payload),
                None => api.add_session(&payload),
            };
            let _ = tx.send(result);
        });
        self.session_form.rx = Some(rx);
    }

    pub(super) fn poll_session_form(&mut self) {
        if let Some(ref rx) = self.session_form.rx {
            if let Ok(result) = rx.try_recv() {
                self.session_form.rx = None;
                self.session_form.saving = false;
                match result {
                    Ok(_) => {
                        self.detail.dirty = true;
                        self.nav.pop();
                    }
                    Err(e) => self.session_form.error = Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_blank_is_none() {
        assert_eq!(parse_optional_f32("x", "  ").unwrap(), None);
        assert_eq!(parse_optional_f32("x", "55").unwrap(), Some(55.0));
        assert!(parse_optional_f32("x", "abc").is_err());
    }

    #[test]
    fn test_student_form_rejects_non_numeric_age() {
        let mut form = StudentFormState::new();
        form.name = "Maria".to_string();
        form.age = "nine".to_string();
        assert!(form.payload().unwrap_err().is_validation());
    }

    #[test]
    fn test_student_form_round_trip() {
        let student = Student {
            id: 5,
            name: "Maria".to_string(),
            age: 9,
            condition: "scolioză".to_string(),
            notes: "".to_string(),
        };
        let mut form = StudentFormState::new();
        form.load_edit(&student);
        assert_eq!(form.editing, Some(5));
        let payload = form.payload().unwrap();
        assert_eq!(payload.name, "Maria");
        assert_eq!(payload.age, 9);
    }

    #[test]
    fn test_measurement_form_requires_numbers() {
        let mut form = MeasurementFormState::new();
        form.load_new(7);
        form.height = "120".to_string();
        form.weight = "".to_string();
        assert!(form.payload().is_err());

        form.weight = "25".to_string();
        let payload = form.payload().unwrap();
        assert_eq!(payload.student_id, Some(7));
        assert_eq!(payload.head_circumference, None);
    }

    #[test]
    fn test_measurement_edit_omits_student_id() {
        let mut form = MeasurementFormState::new();
        form.load_new(7);
        form.editing = Some(3);
        form.height = "120".to_string();
        form.weight = "25".to_string();
        assert_eq!(form.payload().unwrap().student_id, None);
    }

    #[test]
    fn test_session_form_date_validation() {
        let mut form = SessionFormState::new();
        form.load_new(7);
        form.date_input = "05-05-2025".to_string();
        let payload = form.payload().unwrap();
        assert_eq!(payload.session_date.to_string(), "2025-05-05");

        form.date_input = "2025/05/05".to_string();
        assert!(form.payload().unwrap_err().is_validation());
    }
}
