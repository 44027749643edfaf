use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, draft::DraftPositionDto},
    server::{error::Error, model::app::AppState, service::draft::DraftService},
};

pub static DRAFT_TAG: &str = "draft";

/// Every recorded draft pick, by season year then position
#[utoipa::path(
    get,
    path = "/api/draft-positions",
    tag = DRAFT_TAG,
    responses(
        (status = 200, description = "Success when retrieving draft positions", body = Vec<DraftPositionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_draft_positions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let positions = DraftService::new(&state.db).get_draft_positions().await?;

    Ok((StatusCode::OK, Json(positions)))
}

/// Draft order of one season
#[utoipa::path(
    get,
    path = "/api/seasons/{year}/draft-positions",
    tag = DRAFT_TAG,
    params(("year" = i32, Path, description = "Season year")),
    responses(
        (status = 200, description = "Success when retrieving the season's draft order", body = Vec<DraftPositionDto>),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season_draft_positions(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let positions = DraftService::new(&state.db).get_by_season_year(year).await?;

    Ok((StatusCode::OK, Json(positions)))
}

/// Draft history of one team, oldest season first
#[utoipa::path(
    get,
    path = "/api/teams/{id}/draft-positions",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Success when retrieving the team's draft history", body = Vec<DraftPositionDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_draft_positions(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let positions = DraftService::new(&state.db).get_by_team(team_id).await?;

    Ok((StatusCode::OK, Json(positions)))
}
