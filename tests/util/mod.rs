//! Shared helpers for HTTP-level tests.

use std::sync::Arc;

use almanac::server::{
    model::app::AppState, storage::MemoryPhotoStorage, util::token::TokenVerifier,
};
use almanac_test_utils::prelude::*;
use axum::{body::Body, http::Request, response::Response};

pub const TEST_PUBLIC_URL: &str = "/media";

/// Extension trait for TestContext to create AppState backed by in-memory photo storage
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// AppState using the given storage so tests can inspect stored objects afterwards
    fn into_app_state_with_storage(&self, storage: Arc<MemoryPhotoStorage>) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.into_app_state_with_storage(Arc::new(MemoryPhotoStorage::new(TEST_PUBLIC_URL)))
    }

    fn into_app_state_with_storage(&self, storage: Arc<MemoryPhotoStorage>) -> AppState {
        AppState {
            db: self.db.clone(),
            storage,
            token_verifier: TokenVerifier::new(TEST_JWT_SECRET),
        }
    }
}

/// `Authorization` header value carrying a fresh token for `email`
pub fn bearer(email: &str) -> Result<String, TestError> {
    Ok(format!("Bearer {}", issue_test_token(email)?))
}

/// Reads a response body as JSON
pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
