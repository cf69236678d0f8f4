//! Integration tests for document endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use notehub_core::types::FolderId;

#[tokio::test]
async fn test_create_and_fetch_document() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let folder_id = app.create_folder(&token, "Work").await;

    let created = app
        .request(
            "POST",
            &format!("/api/folders/{folder_id}/documents"),
            Some(json!({ "title": "Plan" })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["folder_id"], json!(folder_id));
    assert_eq!(created.data()["content"], json!({}));

    let doc_id = created.data()["id"].as_str().expect("id").to_string();
    let fetched = app
        .request("GET", &format!("/api/documents/{doc_id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["title"], json!("Plan"));
}

#[tokio::test]
async fn test_document_list_omits_bodies() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let folder_id = app.create_folder(&token, "Work").await;
    let first = app
        .create_document(&token, &folder_id, "First", json!({ "text": "one" }))
        .await;
    let second = app
        .create_document(&token, &folder_id, "Second", json!({ "text": "two" }))
        .await;

    let listed = app
        .request(
            "GET",
            &format!("/api/folders/{folder_id}/documents"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let docs = listed.data().as_array().expect("array");
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["id"], json!(first));
    assert_eq!(docs[1]["id"], json!(second));
    assert!(docs.iter().all(|d| d.get("content").is_none()));
}

#[tokio::test]
async fn test_update_merges_content() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let folder_id = app.create_folder(&token, "Work").await;
    let doc_id = app
        .create_document(&token, &folder_id, "Plan", json!({ "a": 1, "b": 2 }))
        .await;

    let updated = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}"),
            Some(json!({ "content": { "a": 9 } })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["content"], json!({ "a": 9, "b": 2 }));
    assert_eq!(updated.data()["title"], json!("Plan"));

    let removed = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}"),
            Some(json!({ "title": "Plan v2", "content": { "b": null } })),
            Some(&token),
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.data()["content"], json!({ "a": 9 }));
    assert_eq!(removed.data()["title"], json!("Plan v2"));
}

#[tokio::test]
async fn test_update_rejects_unknown_and_empty_fields() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let folder_id = app.create_folder(&token, "Work").await;
    let other_folder = app.create_folder(&token, "Home").await;
    let doc_id = app
        .create_document(&token, &folder_id, "Plan", json!({}))
        .await;

    let moved = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}"),
            Some(json!({ "folder_id": other_folder })),
            Some(&token),
        )
        .await;
    assert_eq!(moved.status, StatusCode::BAD_REQUEST);

    let blank = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}"),
            Some(json!({ "title": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.error_code(), Some("ValidationError"));

    let fetched = app
        .request("GET", &format!("/api/documents/{doc_id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.data()["folder_id"], json!(folder_id));
    assert_eq!(fetched.data()["title"], json!("Plan"));
}

#[tokio::test]
async fn test_non_owner_cannot_read_or_write_document() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.sign_in("Alice");
    let (_, bob) = app.sign_in("Bob");
    let folder_id = app.create_folder(&alice, "Private").await;
    let doc_id = app
        .create_document(&alice, &folder_id, "Diary", json!({ "text": "secret" }))
        .await;

    let read = app
        .request("GET", &format!("/api/documents/{doc_id}"), None, Some(&bob))
        .await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);
    assert!(!read.body.to_string().contains("secret"));

    let write = app
        .request(
            "PUT",
            &format!("/api/documents/{doc_id}"),
            Some(json!({ "title": "Mine now" })),
            Some(&bob),
        )
        .await;
    assert_eq!(write.status, StatusCode::NOT_FOUND);

    let create = app
        .request(
            "POST",
            &format!("/api/folders/{folder_id}/documents"),
            Some(json!({ "title": "Planted" })),
            Some(&bob),
        )
        .await;
    assert_eq!(create.status, StatusCode::NOT_FOUND);

    let unchanged = app
        .request("GET", &format!("/api/documents/{doc_id}"), None, Some(&alice))
        .await;
    assert_eq!(unchanged.data()["title"], json!("Diary"));
    assert_eq!(app.store.stats().live_handles, 0);
}

#[tokio::test]
async fn test_orphaned_document_is_not_found() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in("Alice");
    let orphan = app.store.insert_orphan_document(FolderId::new(), "Lost");

    let response = app
        .request("GET", &format!("/api/documents/{}", orphan.id), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
