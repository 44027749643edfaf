use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        owner::{OwnerValidationDto, ValidateEmailDto},
    },
    server::{error::Error, model::app::AppState, service::owner::OwnerService},
};

pub static AUTH_TAG: &str = "auth";

/// Check whether an email belongs to an approved league owner
///
/// Unknown emails are not an error; they return `valid: false` with a message.
#[utoipa::path(
    post,
    path = "/api/auth/validate",
    tag = AUTH_TAG,
    request_body = ValidateEmailDto,
    responses(
        (status = 200, description = "Validation outcome for the email", body = OwnerValidationDto),
        (status = 400, description = "Email missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_email(
    State(state): State<AppState>,
    Json(request): Json<ValidateEmailDto>,
) -> Result<impl IntoResponse, Error> {
    let validation = OwnerService::new(&state.db)
        .validate_email(&request.email)
        .await?;

    Ok((StatusCode::OK, Json(validation)))
}
