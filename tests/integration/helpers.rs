//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use notehub_auth::jwt::JwtEncoder;
use notehub_core::config::{AppConfig, StoreProvider};
use notehub_core::types::UserId;
use notehub_database::MemoryHierarchyStore;
use notehub_entity::user::Identity;

/// Secret shared by the app under test and the token minting helpers.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The in-memory store behind the router
    pub store: MemoryHierarchyStore,
    /// Application config
    pub config: AppConfig,
    /// Mints session tokens the way the auth provider would
    pub encoder: JwtEncoder,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = StoreProvider::Memory;
        config.auth.jwt_secret = TEST_SECRET.to_string();

        let store = MemoryHierarchyStore::new();
        let router = notehub_api::build_app(config.clone(), Arc::new(store.clone()));
        let encoder = JwtEncoder::new(&config.auth);

        Self {
            router,
            store,
            config,
            encoder,
        }
    }

    /// A fresh user and a valid session token for them
    pub fn sign_in(&self, name: &str) -> (Identity, String) {
        let mut identity = Identity::new(UserId::new());
        identity.name = Some(name.to_string());
        identity.email = Some(format!("{}@test.com", name.to_lowercase()));
        let token = self.encoder.issue(&identity).expect("Failed to issue token");
        (identity, token)
    }

    /// Make a JSON request with an optional bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, &body_str, token).await
    }

    /// Make a request with a verbatim body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: &str,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Make a GET request carrying the session in a cookie
    pub async fn get_with_cookie(&self, path: &str, token: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .header(
                "Cookie",
                format!("{}={}", self.config.auth.cookie_name, token),
            )
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Send a prepared request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            bytes,
        }
    }

    /// Create a folder through the API and return its id
    pub async fn create_folder(&self, token: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/folders",
                Some(serde_json::json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Folder creation failed: {:?}",
            response.body
        );
        response.data()["id"]
            .as_str()
            .expect("No folder id")
            .to_string()
    }

    /// Create a document through the API and return its id
    pub async fn create_document(
        &self,
        token: &str,
        folder_id: &str,
        title: &str,
        content: Value,
    ) -> String {
        let response = self
            .request(
                "POST",
                &format!("/api/folders/{folder_id}/documents"),
                Some(serde_json::json!({ "title": title, "content": content })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Document creation failed: {:?}",
            response.body
        );
        response.data()["id"]
            .as_str()
            .expect("No document id")
            .to_string()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw body bytes
    pub bytes: Vec<u8>,
}

impl TestResponse {
    /// The `data` field of a success envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error` code of an error body
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}
