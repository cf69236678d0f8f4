//! Integration tests for session handling across the API.

mod helpers;

use http::StatusCode;
use serde_json::json;

use notehub_auth::jwt::JwtEncoder;
use notehub_core::config::AuthConfig;

#[tokio::test]
async fn test_missing_session_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/folders", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("Unauthorized"));
    assert_eq!(app.store.stats().acquisitions, 0);
}

#[tokio::test]
async fn test_expired_session_is_unauthorized() {
    let app = helpers::TestApp::new();
    let (identity, _) = app.sign_in("Alice");
    let expired = app
        .encoder
        .issue_with_ttl(&identity, chrono::Duration::hours(-1))
        .expect("token");

    let response = app.request("GET", "/api/folders", None, Some(&expired)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("Unauthorized"));
}

#[tokio::test]
async fn test_tampered_session_is_invalid() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");

    let tampered = app
        .request("GET", "/api/folders", None, Some(&format!("{token}x")))
        .await;
    assert_eq!(tampered.status, StatusCode::UNAUTHORIZED);
    assert_eq!(tampered.error_code(), Some("InvalidSessionError"));

    let foreign_config = AuthConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..AuthConfig::default()
    };
    let (identity, _) = app.sign_in("Mallory");
    let forged = JwtEncoder::new(&foreign_config)
        .issue(&identity)
        .expect("token");
    let response = app.request("GET", "/api/folders", None, Some(&forged)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("InvalidSessionError"));
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    app.create_folder(&token, "Work").await;

    let response = app.get_with_cookie("/api/folders", &token).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()[0]["name"], json!("Work"));
}

#[tokio::test]
async fn test_invalid_input_reported_before_session() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "" })), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("ValidationError"));
}

#[tokio::test]
async fn test_health_needs_no_session() {
    let app = helpers::TestApp::new();

    let up = app.request("GET", "/api/health", None, None).await;
    assert_eq!(up.status, StatusCode::OK);
    assert_eq!(up.data()["status"], json!("ok"));
    assert_eq!(up.body["success"], json!(true));

    app.store.set_unavailable(true);
    let down = app.request("GET", "/api/health", None, None).await;
    assert_eq!(down.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(down.data()["store"], json!("unavailable"));
    assert_eq!(down.body["success"], json!(false));
}

#[tokio::test]
async fn test_unknown_route_has_error_body() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");

    let response = app.request("GET", "/api/nope", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), Some("NotFound"));
    assert_eq!(response.body["retryable"], json!(false));
}

#[tokio::test]
async fn test_wrong_method_has_error_body() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");

    let response = app
        .request("DELETE", "/api/folders", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.error_code(), Some("ValidationError"));
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("DELETE")
    );
    assert_eq!(app.store.stats().acquisitions, 0);
}
