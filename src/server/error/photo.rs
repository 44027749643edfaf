use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Content type {0:?} is not an accepted photo type")]
    UnsupportedContentType(String),
    #[error("Filename {0:?} does not have a jpg, jpeg or png extension")]
    InvalidExtension(String),
    #[error("No photo found with ID {0}")]
    PhotoNotFound(i32),
    #[error("No stored object found for key {0:?}")]
    ObjectNotFound(String),
    #[error("Approved owner ID {owner_id} attempted to delete photo ID {photo_id} uploaded by another owner")]
    NotUploader { photo_id: i32, owner_id: i32 },
    #[error("Storage key provided for photo ID {0} does not match the stored key")]
    StorageKeyMismatch(i32),
    #[error("Storage key {0:?} is not a valid photo key")]
    InvalidStorageKey(String),
    #[error("Expected between 1 and {max} storage keys, received {received}")]
    InvalidKeyBatch { received: usize, max: usize },
}

impl IntoResponse for PhotoError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UnsupportedContentType(_) => {
                error_response(StatusCode::BAD_REQUEST, "Only JPG and PNG files are allowed")
            }
            Self::InvalidExtension(_) => {
                error_response(StatusCode::BAD_REQUEST, "Invalid file extension")
            }
            Self::PhotoNotFound(_) | Self::ObjectNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Photo not found")
            }
            Self::NotUploader { .. } => error_response(
                StatusCode::FORBIDDEN,
                "You can only delete your own photos",
            ),
            Self::StorageKeyMismatch(_) => {
                error_response(StatusCode::BAD_REQUEST, "Storage key mismatch")
            }
            Self::InvalidStorageKey(_) => {
                error_response(StatusCode::BAD_REQUEST, "Invalid storage key")
            }
            Self::InvalidKeyBatch { max, .. } => error_response(
                StatusCode::BAD_REQUEST,
                format!("Provide between 1 and {} storage keys per request", max),
            ),
        }
    }
}
