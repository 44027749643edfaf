//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments and their responses checked for
//! status codes.

mod admin;
mod photo;
mod season;
mod team;

use almanac_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::util::{bearer, TestContextExt};

/// Headers carrying a bearer token for `email`
fn auth_headers(email: &str) -> Result<HeaderMap, TestError> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer(email)?).unwrap());

    Ok(headers)
}
