use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        photo::{DeletePhotoDto, PhotoDto, ViewUrlsDto, ViewUrlsRequestDto},
    },
    server::{
        controller::util::get_owner::get_owner, error::Error, model::app::AppState,
        service::photo::PhotoService,
    },
};

pub static PHOTO_TAG: &str = "photo";

/// Max accepted upload body size
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

#[derive(Deserialize, IntoParams)]
pub struct UploadParams {
    /// Original filename of the photo, used for its extension
    pub filename: String,
    /// Caption shown with the photo
    pub caption: Option<String>,
}

/// Approved draft photos of a season, newest first
#[utoipa::path(
    get,
    path = "/api/seasons/{year}/photos",
    tag = PHOTO_TAG,
    params(("year" = i32, Path, description = "Season year")),
    responses(
        (status = 200, description = "Success when retrieving season photos", body = Vec<PhotoDto>),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season_photos(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let photos = PhotoService::new(&state.db, state.storage.as_ref())
        .get_photos_by_season(year)
        .await?;

    Ok((StatusCode::OK, Json(photos)))
}

/// Upload a draft photo for a season
///
/// The request body is the raw JPEG or PNG file; `Content-Type` must match it. Requires a
/// bearer token belonging to an approved owner.
#[utoipa::path(
    post,
    path = "/api/seasons/{year}/photos",
    tag = PHOTO_TAG,
    params(("year" = i32, Path, description = "Season year"), UploadParams),
    request_body(content = Vec<u8>, description = "JPEG or PNG file contents", content_type = "image/jpeg"),
    responses(
        (status = 201, description = "Photo stored and recorded", body = PhotoDto),
        (status = 400, description = "File type or extension not allowed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Not an approved league owner", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(year): Path<i32>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let owner = get_owner(&state, &headers).await?;

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let photo = PhotoService::new(&state.db, state.storage.as_ref())
        .upload_photo(
            &owner,
            year,
            &params.filename,
            params.caption.as_deref(),
            content_type,
            body.to_vec(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(photo)))
}

/// Delete a draft photo uploaded by the caller
///
/// The storage key must match the photo's stored key.
#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Photo ID")),
    request_body = DeletePhotoDto,
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 400, description = "Storage key mismatch", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Not an approved owner or not the photo's uploader", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(photo_id): Path<i32>,
    Json(request): Json<DeletePhotoDto>,
) -> Result<impl IntoResponse, Error> {
    let owner = get_owner(&state, &headers).await?;

    PhotoService::new(&state.db, state.storage.as_ref())
        .delete_photo(&owner, photo_id, &request.storage_key)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// View URLs for a batch of up to 100 storage keys
#[utoipa::path(
    post,
    path = "/api/photos/urls",
    tag = PHOTO_TAG,
    request_body = ViewUrlsRequestDto,
    responses(
        (status = 200, description = "URL for every requested key", body = ViewUrlsDto),
        (status = 400, description = "Empty or oversized batch, or an invalid key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_view_urls(
    State(state): State<AppState>,
    Json(request): Json<ViewUrlsRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let urls = PhotoService::new(&state.db, state.storage.as_ref())
        .get_view_urls(&request.storage_keys)?;

    Ok((StatusCode::OK, Json(urls)))
}
