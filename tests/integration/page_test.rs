//! Integration tests for the application page route.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_anonymous_page_prompts_sign_in_without_store_access() {
    let app = helpers::TestApp::new();
    let before = app.store.stats();

    let response = app.request("GET", "/app", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["state"], json!("unauthenticated"));
    assert_eq!(response.body["message"], json!("Session expired, please sign in"));
    assert_eq!(response.body["sign_in"], json!("/signin"));

    let deep = app
        .request("GET", &format!("/app/{}", uuid::Uuid::new_v4()), None, None)
        .await;
    assert_eq!(deep.status, StatusCode::UNAUTHORIZED);

    let after = app.store.stats();
    assert_eq!(after.acquisitions, before.acquisitions);
    assert_eq!(after.reads, before.reads);
}

#[tokio::test]
async fn test_expired_session_gets_sign_in_prompt() {
    let app = helpers::TestApp::new();
    let (identity, _) = app.sign_in("Alice");
    let expired = app
        .encoder
        .issue_with_ttl(&identity, chrono::Duration::hours(-1))
        .expect("token");

    let response = app.request("GET", "/app", None, Some(&expired)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["state"], json!("unauthenticated"));
}

#[tokio::test]
async fn test_root_page_lists_folders() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let work = app.create_folder(&token, "Work").await;

    let response = app.request("GET", "/app", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["state"], json!("ready"));

    let view = &response.body["view"];
    assert_eq!(view["folders"][0]["id"], json!(work));
    assert_eq!(view["active_folder"], json!(null));
    assert_eq!(view["documents"], json!([]));
    assert_eq!(view["active_document"], json!(null));
}

#[tokio::test]
async fn test_trailing_slash_is_root_page() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let work = app.create_folder(&token, "Work").await;

    let bare = app.request("GET", "/app", None, Some(&token)).await;
    let slashed = app.request("GET", "/app/", None, Some(&token)).await;
    assert_eq!(slashed.status, StatusCode::OK);
    assert_eq!(slashed.body["state"], json!("ready"));
    assert_eq!(slashed.body["view"]["folders"][0]["id"], json!(work));
    assert_eq!(slashed.body["view"]["active_folder"], json!(null));
    assert_eq!(slashed.bytes, bare.bytes);

    let folder_slashed = app
        .request("GET", &format!("/app/{work}/"), None, Some(&token))
        .await;
    assert_eq!(folder_slashed.status, StatusCode::OK);
    assert_eq!(folder_slashed.body["view"]["active_folder"]["id"], json!(work));
}

#[tokio::test]
async fn test_document_page_selects_folder_and_document() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let folder = app.create_folder(&token, "Work").await;
    let doc = app
        .create_document(&token, &folder, "Plan", json!({ "text": "ship it" }))
        .await;

    let response = app
        .get_with_cookie(&format!("/app/{folder}/{doc}"), &token)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let view = &response.body["view"];
    assert_eq!(view["active_folder"]["id"], json!(folder));
    assert_eq!(view["documents"][0]["id"], json!(doc));
    assert_eq!(view["active_document"]["id"], json!(doc));
    assert_eq!(
        view["active_document"]["folder_id"],
        view["active_folder"]["id"]
    );
    assert_eq!(view["active_document"]["content"], json!({ "text": "ship it" }));
}

#[tokio::test]
async fn test_page_is_idempotent() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let folder = app.create_folder(&token, "Work").await;
    let doc = app
        .create_document(&token, &folder, "Plan", json!({ "b": 2, "a": 1 }))
        .await;
    let path = format!("/app/{folder}/{doc}");

    let first = app.request("GET", &path, None, Some(&token)).await;
    let second = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.bytes, second.bytes);
}

#[tokio::test]
async fn test_document_outside_active_folder_is_not_found() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let work = app.create_folder(&token, "Work").await;
    let home = app.create_folder(&token, "Home").await;
    let recipe = app
        .create_document(&token, &home, "Recipe", json!({}))
        .await;

    let response = app
        .request("GET", &format!("/app/{work}/{recipe}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.get("view").is_none());
}

#[tokio::test]
async fn test_foreign_folder_page_is_not_found() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.sign_in("Alice");
    let (_, bob) = app.sign_in("Bob");
    let folder = app.create_folder(&alice, "Private").await;

    let response = app
        .request("GET", &format!("/app/{folder}"), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), Some("NotFound"));
}

#[tokio::test]
async fn test_bad_paths_are_validation_errors() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let id = uuid::Uuid::new_v4();

    let too_deep = app
        .request("GET", &format!("/app/{id}/{id}/{id}"), None, Some(&token))
        .await;
    assert_eq!(too_deep.status, StatusCode::BAD_REQUEST);

    let malformed = app
        .request("GET", "/app/not-a-folder", None, Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.error_code(), Some("ValidationError"));
}

#[tokio::test]
async fn test_tampered_session_on_page_is_rejected() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let tampered = format!("{token}x");

    let response = app.request("GET", "/app", None, Some(&tampered)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("InvalidSessionError"));
}
