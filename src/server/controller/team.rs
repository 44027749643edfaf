use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        team::{TeamAliasDto, TeamDto, TeamWithStatsDto},
    },
    server::{
        error::{league::LeagueError, Error},
        model::app::AppState,
        service::team::TeamService,
    },
};

pub static TEAM_TAG: &str = "team";

#[derive(Deserialize, IntoParams)]
pub struct TeamsParams {
    /// Only include teams still in the league
    #[serde(default)]
    pub active_only: bool,
}

/// Teams ordered by name
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(TeamsParams),
    responses(
        (status = 200, description = "Success when retrieving teams", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    Query(params): Query<TeamsParams>,
) -> Result<impl IntoResponse, Error> {
    let teams = TeamService::new(&state.db)
        .get_teams(params.active_only)
        .await?;

    Ok((StatusCode::OK, Json(teams)))
}

/// Active teams with championships, appearances and title years
///
/// Records include history inherited from defunct predecessor franchises.
#[utoipa::path(
    get,
    path = "/api/teams/stats",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Success when retrieving team records", body = Vec<TeamWithStatsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams_with_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let teams = TeamService::new(&state.db).get_teams_with_stats().await?;

    Ok((StatusCode::OK, Json(teams)))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Success when retrieving the team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(team) = TeamService::new(&state.db).get_team(team_id).await? else {
        return Err(LeagueError::TeamNotFound(team_id).into());
    };

    Ok((StatusCode::OK, Json(team)))
}

/// Historical team names and the teams they resolve to
#[utoipa::path(
    get,
    path = "/api/team-aliases",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Success when retrieving team aliases", body = Vec<TeamAliasDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_aliases(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let aliases = TeamService::new(&state.db).get_aliases().await?;

    Ok((StatusCode::OK, Json(aliases)))
}

/// Team a historical name resolves to
#[utoipa::path(
    get,
    path = "/api/team-aliases/{alias}",
    tag = TEAM_TAG,
    params(("alias" = String, Path, description = "Historical team name")),
    responses(
        (status = 200, description = "Success when resolving the alias", body = TeamDto),
        (status = 404, description = "Alias not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_by_alias(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let Some(team) = TeamService::new(&state.db).get_team_by_alias(&alias).await? else {
        return Err(LeagueError::UnknownAlias(alias).into());
    };

    Ok((StatusCode::OK, Json(team)))
}
