#![allow(dead_code)]

use school_admin::application::services::Catalog;
use school_admin::config::{Config, ResourcePaths};
use school_admin::domain::collaborators::LoadingIndicator;
use school_admin::infrastructure::http::HttpTransport;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "anon-key-for-tests";
pub const AUTH_TOKEN: &str = "jwt-token-for-tests";

/// Counts `begin`/`end` calls so tests can check the indicator stays balanced.
#[derive(Debug, Default)]
pub struct CountingIndicator {
    begins: AtomicUsize,
    ends: AtomicUsize,
}

impl CountingIndicator {
    pub fn begins(&self) -> usize {
        self.begins.load(Ordering::SeqCst)
    }

    pub fn ends(&self) -> usize {
        self.ends.load(Ordering::SeqCst)
    }
}

impl LoadingIndicator for CountingIndicator {
    fn begin(&self) {
        self.begins.fetch_add(1, Ordering::SeqCst);
    }

    fn end(&self) {
        self.ends.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn test_config(base_url: &str, timeout_ms: u64) -> Config {
    Config {
        base_url: base_url.to_string(),
        api_key: API_KEY.to_string(),
        auth_token: AUTH_TOKEN.to_string(),
        timeout_ms,
        debug: false,
        refresh_interval_ms: 0,
        top_courses: 5,
        paths: ResourcePaths::default(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

pub fn create_transport(
    base_url: &str,
    timeout_ms: u64,
) -> (Arc<HttpTransport>, Arc<CountingIndicator>) {
    let indicator = Arc::new(CountingIndicator::default());
    let transport =
        HttpTransport::new(&test_config(base_url, timeout_ms), indicator.clone()).unwrap();
    (Arc::new(transport), indicator)
}

pub fn create_catalog(server: &MockServer) -> Catalog<HttpTransport> {
    let (transport, _) = create_transport(&server.uri(), 2_000);
    Catalog::new(transport, &ResourcePaths::default())
}

/// Serves a small school: two teachers, two students, three courses, four enrollments.
///
/// Course 12 has no teacher and enrollment 4 points at a deleted student.
pub async fn mount_school(server: &MockServer) {
    let collections = [
        (
            "/teachers",
            json!([
                { "id_teacher": 1, "name": "Marta Ruiz", "specialty": "Mathematics" },
                { "id_teacher": 2, "name": "Jorge Peña", "specialty": "Physics" }
            ]),
        ),
        (
            "/students",
            json!([
                { "id_student": 1, "name": "Ana Gómez", "email": "ana@school.edu", "registration_date": "2025-01-10" },
                { "id_student": 2, "name": "Luis Vera", "email": "luis@school.edu", "registration_date": "2025-01-12T09:30:00+00:00" }
            ]),
        ),
        (
            "/courses",
            json!([
                { "id_course": 10, "course_name": "Algebra", "id_teacher": 1 },
                { "id_course": 11, "course_name": "Optics", "id_teacher": 2 },
                { "id_course": 12, "course_name": "Drawing", "id_teacher": null }
            ]),
        ),
        (
            "/enrollments",
            json!([
                { "id_enrollment": 1, "id_student": 1, "id_course": 11, "enrollment_date": "2025-02-01" },
                { "id_enrollment": 2, "id_student": 2, "id_course": 11, "enrollment_date": "2025-02-01" },
                { "id_enrollment": 3, "id_student": 1, "id_course": 10, "enrollment_date": "2025-02-03" },
                { "id_enrollment": 4, "id_student": 99, "id_course": 12, "enrollment_date": "2025-02-04" }
            ]),
        ),
    ];

    for (route, body) in collections {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }
}
