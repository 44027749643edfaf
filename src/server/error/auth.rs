use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email validation request did not include an email")]
    EmailRequired,
    #[error("Request is missing a bearer token in the Authorization header")]
    MissingBearer,
    #[error("Bearer token failed verification: {0}")]
    InvalidCredential(#[from] jsonwebtoken::errors::Error),
    #[error("Email {0:?} does not belong to an approved league owner")]
    NotApprovedOwner(String),
    #[error("Approved owner ID {0} attempted an admin-only action")]
    AdminRequired(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::EmailRequired => error_response(StatusCode::BAD_REQUEST, "Email is required"),
            Self::MissingBearer => {
                error_response(StatusCode::UNAUTHORIZED, "Authorization required")
            }
            Self::InvalidCredential(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::NotApprovedOwner(_) => error_response(
                StatusCode::FORBIDDEN,
                "User is not an approved league owner",
            ),
            Self::AdminRequired(_) => {
                error_response(StatusCode::FORBIDDEN, "Admin access required")
            }
        }
    }
}
