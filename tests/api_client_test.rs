//! Integration tests for the blocking API client against a mock backend.

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{analysis_json, measurement_json, session_json, student_json, TestBackend};
use posturedesk::shared::error::ApiError;
use posturedesk::shared::model::{MeasurementPayload, SessionPayload, SessionType, StudentPayload};

#[test]
fn test_list_students() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                student_json(1, "Maria Ionescu", 9),
                student_json(2, "Ion Popescu", 11),
            ])))
            .expect(1),
    );

    let students = backend.api.list_students().unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].name, "Maria Ionescu");
    assert_eq!(students[1].age, 11);
}

#[test]
fn test_add_student_posts_payload() {
    let backend = TestBackend::start();
    let payload = StudentPayload {
        name: "Maria Ionescu".to_string(),
        age: 9,
        condition: "scolioză".to_string(),
        notes: String::new(),
    };
    backend.mount(
        Mock::given(method("POST"))
            .and(path("/students"))
            .and(body_json(&payload))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(student_json(7, "Maria Ionescu", 9)),
            )
            .expect(1),
    );

    let created = backend.api.add_student(&payload).unwrap();
    assert_eq!(created.id, 7);
}

#[test]
fn test_add_student_validation_blocks_network() {
    let backend = TestBackend::start();
    // No mock mounted: an invalid payload must never reach the server
    let payload = StudentPayload {
        name: "  ".to_string(),
        age: 9,
        condition: String::new(),
        notes: String::new(),
    };
    let err = backend.api.add_student(&payload).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_update_student() {
    let backend = TestBackend::start();
    let payload = StudentPayload {
        name: "Maria I.".to_string(),
        age: 10,
        condition: String::new(),
        notes: String::new(),
    };
    backend.mount(
        Mock::given(method("PUT"))
            .and(path("/students/7"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(student_json(7, "Maria I.", 10)))
            .expect(1),
    );

    let updated = backend.api.update_student(7, &payload).unwrap();
    assert_eq!(updated.age, 10);
}

#[test]
fn test_delete_student_404_is_success() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("DELETE"))
            .and(path("/students/7"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1),
    );

    // Deleting an already-gone record is a no-op, not an error
    assert!(backend.api.delete_student(7).is_ok());
}

#[test]
fn test_delete_server_error_is_reported() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("DELETE"))
            .and(path("/sessions/3"))
            .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
            .expect(1),
    );

    let err = backend.api.delete_session(3).unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 500,
            body: "db down".to_string()
        }
    );
}

#[test]
fn test_http_error_carries_body() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .expect(1),
    );

    let err = backend.api.list_students().unwrap_err();
    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[test]
fn test_student_measurements_and_sessions() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("GET"))
            .and(path("/students/7/measurements"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                measurement_json(1, 7, 121.5, 24.0),
            ])))
            .expect(1),
    );
    backend.mount(
        Mock::given(method("GET"))
            .and(path("/students/7/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                session_json(3, 7, "2025-05-05"),
            ])))
            .expect(1),
    );

    let measurements = backend.api.student_measurements(7).unwrap();
    assert_eq!(measurements[0].height, 121.5);
    assert_eq!(measurements[0].head_circumference, None);

    let sessions = backend.api.student_sessions(7).unwrap();
    assert_eq!(sessions[0].session_type, SessionType::Evaluare);
    assert_eq!(sessions[0].session_date.to_string(), "2025-05-05");
}

#[test]
fn test_add_measurement_omits_null_student_id_on_edit() {
    let backend = TestBackend::start();
    let payload = MeasurementPayload {
        student_id: None,
        height: 121.5,
        weight: 24.0,
        head_circumference: None,
        chest_circumference: None,
        abdominal_circumference: None,
        physical_disability: None,
    };
    // student_id must be absent from the body entirely, not null
    let expected = json!({
        "height": 121.5,
        "weight": 24.0,
        "head_circumference": null,
        "chest_circumference": null,
        "abdominal_circumference": null,
        "physical_disability": null
    });
    backend.mount(
        Mock::given(method("PUT"))
            .and(path("/measurements/5"))
            .and(body_json(&expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(measurement_json(5, 7, 121.5, 24.0)))
            .expect(1),
    );

    let updated = backend.api.update_measurement(5, &payload).unwrap();
    assert_eq!(updated.id, 5);
}

#[test]
fn test_add_session_sends_iso_date() {
    let backend = TestBackend::start();
    let payload = SessionPayload {
        student_id: Some(7),
        session_date: SessionPayload::parse_form_date("05-05-2025").unwrap(),
        session_type: SessionType::Corectie,
        notes: "exerciții".to_string(),
    };
    let expected = json!({
        "student_id": 7,
        "session_date": "2025-05-05",
        "session_type": "corectie",
        "notes": "exerciții"
    });
    backend.mount(
        Mock::given(method("POST"))
            .and(path("/sessions"))
            .and(body_json(&expected))
            .respond_with(ResponseTemplate::new(201).set_body_json(session_json(9, 7, "2025-05-05")))
            .expect(1),
    );

    let created = backend.api.add_session(&payload).unwrap();
    assert_eq!(created.id, 9);
}

#[test]
fn test_posture_history() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("GET"))
            .and(path("/posture/4/history"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                analysis_json(11, 4, 18.2, 5.0, 3.1),
                analysis_json(10, 4, 2.0, 1.0, 0.5),
            ])))
            .expect(1),
    );

    let history = backend.api.posture_history(4).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].angles().high_axes(), [true, false, false]);
    assert_eq!(history[1].angles().high_axes(), [false, false, false]);
}

#[test]
fn test_student_photos_embed_latest_analysis() {
    let backend = TestBackend::start();
    backend.mount(
        Mock::given(method("GET"))
            .and(path("/students/7/photos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 4,
                    "student_id": 7,
                    "uri": "/photos/4.jpg",
                    "created_at": "2025-06-01T09:00:00Z",
                    "latest_analysis": analysis_json(11, 4, 18.2, 5.0, 3.1)
                },
                {
                    "id": 5,
                    "student_id": 7,
                    "uri": "/photos/5.jpg",
                    "created_at": "2025-06-02T09:00:00Z"
                }
            ])))
            .expect(1),
    );

    let photos = backend.api.student_photos(7).unwrap();
    assert_eq!(photos.len(), 2);
    assert!(photos[0].latest_analysis.is_some());
    assert!(photos[1].latest_analysis.is_none());
}

#[test]
fn test_network_error_on_unreachable_server() {
    use posturedesk::app::Config;
    use posturedesk::shared::config::AppConfig;

    // Nothing listens on this port
    let config =
        Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:1")).unwrap();
    let api = posturedesk::app::ApiClient::new(config);
    let err = api.list_students().unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }));
}
