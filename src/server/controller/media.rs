use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
};

use crate::server::{error::Error, model::app::AppState, service::photo::PhotoService};

/// Serves the stored object of an approved photo by key
///
/// Used when photos are kept by the filesystem or memory backend and view URLs point back at
/// this server. Keys without an approved photo recorded under them are reported as missing.
pub async fn get_media(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (content_type, bytes) = PhotoService::new(&state.db, state.storage.as_ref())
        .get_object(&key)
        .await?;

    Ok((StatusCode::OK, [(CONTENT_TYPE, content_type)], bytes))
}
