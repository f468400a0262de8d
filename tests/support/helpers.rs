// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use faculty_portal::application::queries::QuerySettings;
use faculty_portal::application::services::ApplicationServices;
use faculty_portal::domain::announcement::AnnouncementReadRepository;
use faculty_portal::domain::faculty::FacultyReadRepository;
use faculty_portal::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn make_router_with(
    announcements: Arc<dyn AnnouncementReadRepository>,
    faculty: Arc<dyn FacultyReadRepository>,
    settings: QuerySettings,
) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(announcements, faculty, settings));
    build_router(HttpState { services })
}

pub fn make_router(
    announcements: Arc<dyn AnnouncementReadRepository>,
    faculty: Arc<dyn FacultyReadRepository>,
) -> axum::Router {
    make_router_with(announcements, faculty, QuerySettings::default())
}

pub async fn send(app: &axum::Router, uri: &str) -> Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// GET `uri`, assert 200 and return the parsed body.
pub async fn get_json(app: &axum::Router, uri: &str) -> Value {
    let resp = send(app, uri).await;
    let status = resp.status();
    let body = json_body(resp).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
    body
}

/// Titles of a JSON announcement array, in order.
pub fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected: StatusCode, error: &str) -> Value {
    assert_eq!(resp.status(), expected);
    let body = json_body(resp).await;
    assert_eq!(body["error"], error, "unexpected body: {body}");
    assert!(body["message"].is_string());
    body
}
