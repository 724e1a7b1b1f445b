//! Common test utilities for e2e tests
//!
//! Builds the full router on top of a fresh in-memory SQLite database
//! bootstrapped through the real migrations.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use tower::util::ServiceExt;

use hospital_records::infrastructure::driven_adapters::config::{
    AppConfig, DatabaseConfig, ServerConfig,
};
use hospital_records::infrastructure::driven_adapters::{HtmlViewRenderer, StorageGateway};
use hospital_records::infrastructure::driving_adapters::web::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub storage: StorageGateway,
}

impl TestApp {
    /// Create a new test application with an empty database
    pub async fn new() -> Self {
        let config = create_test_config();

        let storage = StorageGateway::connect(&config.database)
            .await
            .expect("Failed to open test database");
        storage
            .initialize()
            .await
            .expect("Failed to run migrations");

        let app_state = AppState::new(&storage, Arc::new(HtmlViewRenderer::new()));

        Self {
            router: web::router(app_state),
            storage,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// Submit a url-encoded form
    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// GET a page and return its status and body
    pub async fn page(&self, uri: &str) -> (StatusCode, String) {
        let response = self.get(uri).await;
        let status = response.status();
        (status, body_text(response).await)
    }

    /// Add Alice and return her id
    pub async fn add_alice(&self) -> i64 {
        let response = self.post_form("/add_patient", ALICE_FORM).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        self.last_id("Patients", "PatientID").await
    }

    /// Add Dr. Bob and return his id
    pub async fn add_bob(&self) -> i64 {
        let response = self.post_form("/add_doctor", BOB_FORM).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        self.last_id("Doctors", "DoctorID").await
    }

    /// Book a checkup and return the appointment id
    pub async fn book(&self, patient_id: i64, doctor_id: i64, date: &str) -> i64 {
        let form = format!(
            "patient_id={patient_id}&doctor_id={doctor_id}&appointment_date={date}&notes=checkup&status=scheduled"
        );
        let response = self.post_form("/add_appointment", &form).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        self.last_id("Appointments", "AppointmentID").await
    }

    /// Number of rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(self.storage.pool())
            .await
            .expect("Failed to count rows")
    }

    async fn last_id(&self, table: &str, column: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT MAX({column}) FROM {table}"))
            .fetch_one(self.storage.pool())
            .await
            .expect("Failed to read last id")
    }
}

pub const ALICE_FORM: &str =
    "name=Alice&dob=1990-01-01&gender=F&contact=555-1000&address=1+Main+St";

pub const BOB_FORM: &str =
    "name=Dr.+Bob&specialty=Cardiology&contact=555-2000&email=bob%40x.com";

/// Create a test configuration backed by an in-memory database
fn create_test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        // A single connection keeps every query on the same in-memory database
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
    }
}

/// Read a response body as UTF-8 text
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Location header of a redirect
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
