use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        team::{CreateTeamAliasDto, TeamAliasDto, TeamDto, UpdateTeamDto},
    },
    server::{
        controller::util::get_owner::get_admin, error::Error, model::app::AppState,
        service::team::TeamService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Update team metadata
///
/// Omitted fields are left untouched. Requires an admin bearer token.
#[utoipa::path(
    put,
    path = "/api/admin/teams/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i32>,
    Json(changes): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = get_admin(&state, &headers).await?;

    let team = TeamService::new(&state.db)
        .update_team(team_id, changes)
        .await?;

    tracing::info!("Admin owner ID {} updated team ID {}", admin.owner_id, team_id);

    Ok((StatusCode::OK, Json(team)))
}

/// Record a historical name for a team
#[utoipa::path(
    post,
    path = "/api/admin/team-aliases",
    tag = ADMIN_TAG,
    request_body = CreateTeamAliasDto,
    responses(
        (status = 201, description = "Alias created", body = TeamAliasDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Alias already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team_alias(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(new_alias): Json<CreateTeamAliasDto>,
) -> Result<impl IntoResponse, Error> {
    get_admin(&state, &headers).await?;

    let alias = TeamService::new(&state.db).create_alias(new_alias).await?;

    Ok((StatusCode::CREATED, Json(alias)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/team-aliases/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Team alias ID")),
    responses(
        (status = 204, description = "Alias deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Alias not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team_alias(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(alias_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_admin(&state, &headers).await?;

    TeamService::new(&state.db).delete_alias(alias_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
