use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        championship::{ChampionshipStatsDto, ChampionshipTierDto},
    },
    server::{error::Error, model::app::AppState, service::championship::ChampionshipService},
};

pub static CHAMPIONSHIP_TAG: &str = "championship";

/// League-wide championship statistics
///
/// Titles of defunct franchises are credited to their active successors.
#[utoipa::path(
    get,
    path = "/api/championships/stats",
    tag = CHAMPIONSHIP_TAG,
    responses(
        (status = 200, description = "Success when computing championship statistics", body = ChampionshipStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_championship_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let stats = ChampionshipService::new(&state.db).get_stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Teams grouped by championship count, fewest titles first
#[utoipa::path(
    get,
    path = "/api/championships/tiers",
    tag = CHAMPIONSHIP_TAG,
    responses(
        (status = 200, description = "Success when computing championship tiers", body = Vec<ChampionshipTierDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_championship_tiers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let tiers = ChampionshipService::new(&state.db).get_tiers().await?;

    Ok((StatusCode::OK, Json(tiers)))
}
