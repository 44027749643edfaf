//! Error types for the Almanac server.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, league data, photos). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error definitions
//! with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod league;
pub mod photo;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, league::LeagueError, photo::PhotoError,
    },
};

/// Main error type for the Almanac server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (bearer credential, approved owner, admin checks)
/// - League data errors (unknown seasons, teams and aliases, duplicate names)
/// - Photo errors (upload validation, ownership, storage key checks)
/// - External library errors (database, photo storage I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing or invalid bearer token, owner not approved).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// League data error (record not found, conflicting team name).
    #[error(transparent)]
    LeagueError(#[from] LeagueError),
    /// Photo error (file type validation, ownership, key mismatch).
    #[error(transparent)]
    PhotoError(#[from] PhotoError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Photo storage I/O error (object write, read or removal failed).
    #[error(transparent)]
    StorageError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Database and storage errors are treated as internal server errors (500) with
/// logging.
///
/// # Returns
/// - 400 Bad Request - Invalid uploads, mismatched storage keys, invalid key batches
/// - 401 Unauthorized - Missing or invalid bearer token
/// - 403 Forbidden - Not an approved owner, not an admin, not the photo's uploader
/// - 404 Not Found - Unknown season, team, alias or photo
/// - 409 Conflict - Team name already taken
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::LeagueError(err) => err.into_response(),
            Self::PhotoError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and client-facing message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
