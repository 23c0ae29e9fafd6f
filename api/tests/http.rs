use std::sync::Arc;

use axum::http::Method;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{Value, json};
use zad_api::application::http::server::http_server::{router, state};
use zad_api::args::{Args, LlmArgs, LogArgs, PreferenceArgs, ServerArgs};

fn test_args() -> Args {
    let store = std::env::temp_dir().join(format!("zad-test-{}.json", uuid::Uuid::new_v4()));

    Args {
        server: ServerArgs {
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        llm: LlmArgs {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-2.5-pro".to_string(),
            gemini_text_model: "gemini-2.5-flash".to_string(),
        },
        preferences: PreferenceArgs {
            preferences_path: store.to_string_lossy().into_owned(),
        },
        log: LogArgs {
            log_json: false,
            log_filter: "info".to_string(),
        },
    }
}

async fn test_server() -> TestServer {
    let state = state(Arc::new(test_args())).await.unwrap();
    TestServer::new(router(state).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn screens_require_device_header() {
    let server = test_server().await;

    let response = server.get("/screens").await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn fresh_device_starts_with_idle_screens() {
    let server = test_server().await;

    let response = server.get("/screens").add_header("x-device-id", "dev-1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["product"]["state"], "idle");
    assert_eq!(body["data"]["menu"]["state"], "idle");
    assert_eq!(body["data"]["ingredient"]["state"], "idle");
    assert_eq!(body["data"]["places"]["state"], "idle");
    assert_eq!(body["data"]["location"]["state"], "unset");
}

#[tokio::test]
async fn reported_location_is_visible_on_the_screen_set() {
    let server = test_server().await;

    let response = server
        .put("/screens/places/location")
        .add_header("x-device-id", "dev-2")
        .json(&json!({ "latitude": 24.7136, "longitude": 46.6753 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["location"]["state"], "acquired");
    assert_eq!(body["data"]["location"]["coordinates"]["latitude"], 24.7136);
}

#[tokio::test]
async fn denied_location_is_recorded() {
    let server = test_server().await;

    let response = server
        .put("/screens/places/location")
        .add_header("x-device-id", "dev-3")
        .json(&json!({ "denied": true }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["location"]["state"], "denied");
}

#[tokio::test]
async fn out_of_range_coordinates_are_rejected() {
    let server = test_server().await;

    let response = server
        .put("/screens/places/location")
        .add_header("x-device-id", "dev-4")
        .json(&json!({ "latitude": 123.0, "longitude": 46.0 }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn partial_coordinates_are_rejected() {
    let server = test_server().await;

    let response = server
        .put("/screens/places/location")
        .add_header("x-device-id", "dev-5")
        .json(&json!({ "latitude": 24.7 }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn cors_preflight_allows_the_device_header() {
    let server = test_server().await;

    let response = server
        .method(Method::OPTIONS, "/screens")
        .add_header("origin", "http://localhost:5173")
        .add_header("access-control-request-method", "GET")
        .add_header("access-control-request-headers", "x-device-id")
        .await;

    response.assert_status_ok();
    let allowed = response
        .headers()
        .get("access-control-allow-headers")
        .expect("preflight response lists allowed headers")
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("x-device-id"), "allowed headers: {allowed}");
}

#[tokio::test]
async fn images_over_the_default_axum_body_limit_reach_the_handler() {
    let server = test_server().await;

    // 3MB exceeds axum's 2MB default but is within the documented 10MB cap,
    // so the request must reach the analysis pipeline instead of dying at
    // the multipart extractor. Without a reachable model the analysis itself
    // fails upstream, which surfaces as 502.
    let image = Part::bytes(vec![0xFFu8; 3 * 1024 * 1024]);
    let response = server
        .post("/analysis/product")
        .add_header("x-device-id", "dev-img")
        .multipart(MultipartForm::new().add_part("image", image))
        .await;

    assert_eq!(response.status_code(), 502);
    let body: Value = response.json();
    assert_eq!(body["error"], "لم نتمكن من تحليل المنتج. حاول مرة أخرى.");
}

#[tokio::test]
async fn building_a_second_router_reuses_the_metrics_recorder() {
    let first = test_server().await;
    let second = test_server().await;

    first.get("/metrics").await.assert_status_ok();
    second.get("/metrics").await.assert_status_ok();
}

#[tokio::test]
async fn theme_defaults_to_light_and_persists_an_explicit_choice() {
    let server = test_server().await;

    let initial = server
        .get("/preferences/theme")
        .add_header("x-device-id", "dev-6")
        .await;
    initial.assert_status_ok();
    let body: Value = initial.json();
    assert_eq!(body["data"]["dark_mode"], false);

    let updated = server
        .put("/preferences/theme")
        .add_header("x-device-id", "dev-6")
        .json(&json!({ "dark_mode": true }))
        .await;
    updated.assert_status_ok();

    let reread = server
        .get("/preferences/theme")
        .add_header("x-device-id", "dev-6")
        .await;
    let body: Value = reread.json();
    assert_eq!(body["data"]["dark_mode"], true);
}
