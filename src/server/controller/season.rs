use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        season::{DraftLocationDto, SeasonDto},
    },
    server::{
        error::{league::LeagueError, Error},
        model::app::AppState,
        service::season::SeasonService,
    },
};

pub static SEASON_TAG: &str = "season";

/// All seasons, newest first
#[utoipa::path(
    get,
    path = "/api/seasons",
    tag = SEASON_TAG,
    responses(
        (status = 200, description = "Success when retrieving seasons", body = Vec<SeasonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasons(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let seasons = SeasonService::new(&state.db).get_seasons().await?;

    Ok((StatusCode::OK, Json(seasons)))
}

/// Season played in the given year
#[utoipa::path(
    get,
    path = "/api/seasons/{year}",
    tag = SEASON_TAG,
    params(("year" = i32, Path, description = "Season year")),
    responses(
        (status = 200, description = "Success when retrieving the season", body = SeasonDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(season) = SeasonService::new(&state.db)
        .get_season_by_year(year)
        .await?
    else {
        return Err(LeagueError::SeasonNotFound(year).into());
    };

    Ok((StatusCode::OK, Json(season)))
}

/// Draft locations with the years each hosted a draft
#[utoipa::path(
    get,
    path = "/api/draft-locations",
    tag = SEASON_TAG,
    responses(
        (status = 200, description = "Success when retrieving draft locations", body = Vec<DraftLocationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_draft_locations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let locations = SeasonService::new(&state.db).get_draft_locations().await?;

    Ok((StatusCode::OK, Json(locations)))
}
