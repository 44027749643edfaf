//! Bearer token fixtures.
//!
//! Tokens are HS256-signed with [`TEST_JWT_SECRET`], matching what the managed auth backend
//! issues: the subject's email plus an expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::{constant::TEST_JWT_SECRET, error::TestError};

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    email: &'a str,
    exp: i64,
}

/// Issue a bearer token for `email` valid for 15 minutes.
///
/// # Returns
/// - `Ok(String)` - Encoded token, without the `Bearer ` prefix
/// - `Err(TestError::TokenError)` - Signing failed
pub fn issue_test_token(email: &str) -> Result<String, TestError> {
    sign(email, Utc::now() + Duration::minutes(15))
}

/// Issue a bearer token for `email` that expired an hour ago.
pub fn issue_expired_test_token(email: &str) -> Result<String, TestError> {
    sign(email, Utc::now() - Duration::hours(1))
}

fn sign(email: &str, expires_at: chrono::DateTime<Utc>) -> Result<String, TestError> {
    let claims = TestClaims {
        sub: "test-subject",
        email,
        exp: expires_at.timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )?)
}
