//! Common test utilities: a mock backend plus JSON fixture builders.
//!
//! The API client is blocking and spins its own runtime per call, so the
//! harness keeps a separate multi-thread runtime alive to drive the wiremock
//! server while the client under test runs on the test thread.

#![allow(dead_code)]

use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

use posturedesk::app::{ApiClient, Config};
use posturedesk::shared::config::AppConfig;

pub struct TestBackend {
    // Declared before the runtime: the server verifies its expectations on
    // drop and must still have a live executor at that point
    pub server: MockServer,
    rt: Runtime,
    pub api: ApiClient,
}

impl TestBackend {
    pub fn start() -> Self {
        let rt = Runtime::new().expect("test runtime");
        let server = rt.block_on(MockServer::start());
        let config = Config::with_builder(AppConfig::builder().server_url(server.uri()))
            .expect("mock server config");
        let api = ApiClient::new(config);
        Self { server, rt, api }
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(self.server.register(mock));
    }

    /// Requests the server has recorded so far, in arrival order
    pub fn received(&self) -> Vec<wiremock::Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }
}

// Smallest valid 1x1 PNG, usable anywhere image bytes are needed
pub const TINY_PNG: &[u8] = include_bytes!("../fixtures/tiny.png");

pub fn student_json(id: i64, name: &str, age: i32) -> Value {
    json!({
        "id": id,
        "name": name,
        "age": age,
        "condition": "scolioză",
        "notes": ""
    })
}

pub fn measurement_json(id: i64, student_id: i64, height: f32, weight: f32) -> Value {
    json!({
        "id": id,
        "student_id": student_id,
        "height": height,
        "weight": weight,
        "head_circumference": null,
        "chest_circumference": null,
        "abdominal_circumference": null,
        "physical_disability": null,
        "created_at": "2025-05-05T10:00:00Z"
    })
}

pub fn session_json(id: i64, student_id: i64, date: &str) -> Value {
    json!({
        "id": id,
        "student_id": student_id,
        "session_date": date,
        "session_type": "evaluare",
        "notes": "exerciții de corecție"
    })
}

pub fn analysis_json(id: i64, photo_id: i64, shoulder: f32, hip: f32, spine: f32) -> Value {
    json!({
        "id": id,
        "photo_id": photo_id,
        "shoulder_tilt": shoulder,
        "hip_tilt": hip,
        "spine_tilt": spine,
        "overlay_uri": null,
        "created_at": "2025-06-01T09:30:00Z"
    })
}

pub fn analyze_response_json(photo_id: i64, shoulder: f32, hip: f32, spine: f32) -> Value {
    json!({
        "posture": analysis_json(99, photo_id, shoulder, hip, spine),
        "angles": {
            "shoulder_tilt": shoulder,
            "hip_tilt": hip,
            "spine_tilt": spine
        },
        "overlay": ""
    })
}
