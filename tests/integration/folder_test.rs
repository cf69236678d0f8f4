//! Integration tests for folder endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_list_folders() {
    let app = helpers::TestApp::new();
    let (alice, token) = app.sign_in("Alice");

    let empty = app.request("GET", "/api/folders", None, Some(&token)).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body["success"], json!(true));
    assert_eq!(empty.data(), &json!([]));

    let work = app.create_folder(&token, "Work").await;
    let home = app.create_folder(&token, "  Home  ").await;

    let listed = app.request("GET", "/api/folders", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    let folders = listed.data().as_array().expect("array");
    assert_eq!(folders.len(), 2);
    assert_eq!(folders[0]["id"], json!(work));
    assert_eq!(folders[1]["id"], json!(home));
    assert_eq!(folders[1]["name"], json!("Home"));
    assert_eq!(folders[0]["owner_id"], json!(alice.user_id.to_string()));
}

#[tokio::test]
async fn test_folders_are_listed_only_for_their_owner() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.sign_in("Alice");
    let (_, bob) = app.sign_in("Bob");

    app.create_folder(&alice, "Private").await;

    let bobs = app.request("GET", "/api/folders", None, Some(&bob)).await;
    assert_eq!(bobs.status, StatusCode::OK);
    assert_eq!(bobs.data(), &json!([]));
}

#[tokio::test]
async fn test_empty_name_is_rejected_without_creating() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");

    for name in ["", "   "] {
        let response = app
            .request("POST", "/api/folders", Some(json!({ "name": name })), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_code(), Some("ValidationError"));
        assert_eq!(response.body["retryable"], json!(false));
    }

    assert_eq!(app.store.folder_count(), 0);
}

#[tokio::test]
async fn test_oversized_body_is_rejected_without_creating() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let name = "x".repeat(app.config.server.body_limit_bytes + 1);

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": name })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("ValidationError"));
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("request body")
    );
    assert_eq!(app.store.folder_count(), 0);
    assert_eq!(app.store.stats().acquisitions, 0);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");

    let not_json = app
        .request_raw("POST", "/api/folders", "{name:", Some(&token))
        .await;
    assert_eq!(not_json.status, StatusCode::BAD_REQUEST);

    let extra_field = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Work", "owner_id": "someone-else" })),
            Some(&token),
        )
        .await;
    assert_eq!(extra_field.status, StatusCode::BAD_REQUEST);
    assert_eq!(extra_field.error_code(), Some("ValidationError"));

    assert_eq!(app.store.folder_count(), 0);
}

#[tokio::test]
async fn test_foreign_folder_is_indistinguishable_from_missing() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.sign_in("Alice");
    let (_, bob) = app.sign_in("Bob");
    let folder_id = app.create_folder(&alice, "Private").await;

    let own = app
        .request("GET", &format!("/api/folders/{folder_id}"), None, Some(&alice))
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.data()["name"], json!("Private"));

    let foreign = app
        .request("GET", &format!("/api/folders/{folder_id}"), None, Some(&bob))
        .await;
    let missing = app
        .request(
            "GET",
            &format!("/api/folders/{}", uuid::Uuid::new_v4()),
            None,
            Some(&bob),
        )
        .await;

    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(foreign.error_code(), missing.error_code());
    assert!(!foreign.body.to_string().contains("Private"));
}

#[tokio::test]
async fn test_foreign_folder_documents_are_not_found() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.sign_in("Alice");
    let (_, bob) = app.sign_in("Bob");
    let folder_id = app.create_folder(&alice, "Private").await;
    app.create_document(&alice, &folder_id, "Diary", json!({ "text": "secret" }))
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/folders/{folder_id}/documents"),
            None,
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), Some("NotFound"));
    assert!(!response.body.to_string().contains("Diary"));
}

#[tokio::test]
async fn test_malformed_folder_id_is_validation_error() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");

    let response = app
        .request("GET", "/api/folders/not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("ValidationError"));
}

#[tokio::test]
async fn test_store_outage_is_retryable() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    app.store.set_unavailable(true);

    let response = app.request("GET", "/api/folders", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.error_code(), Some("StoreUnavailable"));
    assert_eq!(response.body["retryable"], json!(true));
}

#[tokio::test]
async fn test_handles_released_after_success_and_failure() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.sign_in("Alice");
    let (_, bob) = app.sign_in("Bob");
    let folder_id = app.create_folder(&alice, "Work").await;

    app.request("GET", "/api/folders", None, Some(&alice)).await;
    app.request("GET", &format!("/api/folders/{folder_id}"), None, Some(&bob))
        .await;
    app.request("POST", "/api/folders", Some(json!({ "name": " " })), Some(&alice))
        .await;

    let stats = app.store.stats();
    assert!(stats.acquisitions >= 4);
    assert_eq!(stats.live_handles, 0);
}
