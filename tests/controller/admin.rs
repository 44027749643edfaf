use almanac::{
    model::team::{CreateTeamAliasDto, UpdateTeamDto},
    server::controller::admin::{create_team_alias, delete_team_alias, update_team},
};

use super::*;

/// Expect 200 OK when an admin renames a team
#[tokio::test]
async fn update_team_as_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (team, _) = test.league().insert_owned_team("Zebras", true).await?;
    let headers = auth_headers(TEST_OWNER_EMAIL)?;

    let changes = UpdateTeamDto {
        name: Some("Stripes".to_string()),
        ..Default::default()
    };
    let resp = update_team(
        State(test.into_app_state()),
        headers,
        Path(team.id),
        Json(changes),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden for an approved owner without admin rights
#[tokio::test]
async fn update_team_requires_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (team, _) = test.league().insert_owned_team("Zebras", false).await?;
    let headers = auth_headers(TEST_OWNER_EMAIL)?;

    let resp = update_team(
        State(test.into_app_state()),
        headers,
        Path(team.id),
        Json(UpdateTeamDto::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 401 Unauthorized without a bearer token
#[tokio::test]
async fn create_alias_requires_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let team = test.league().insert_team("Zebras", true).await?;

    let resp = create_team_alias(
        State(test.into_app_state()),
        HeaderMap::new(),
        Json(CreateTeamAliasDto {
            alias: "Striped Horses".to_string(),
            team_id: team.id,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 201 Created then 409 Conflict for the same alias, and 204 on delete
#[tokio::test]
async fn alias_lifecycle() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (team, _) = test.league().insert_owned_team("Zebras", true).await?;
    let state = test.into_app_state();
    let new_alias = CreateTeamAliasDto {
        alias: "Striped Horses".to_string(),
        team_id: team.id,
    };

    let created = create_team_alias(
        State(state.clone()),
        auth_headers(TEST_OWNER_EMAIL)?,
        Json(new_alias.clone()),
    )
    .await
    .into_response();
    let duplicate = create_team_alias(
        State(state.clone()),
        auth_headers(TEST_OWNER_EMAIL)?,
        Json(new_alias),
    )
    .await
    .into_response();

    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let alias_id = crate::util::json_body(created).await["id"]
        .as_i64()
        .unwrap() as i32;
    let deleted = delete_team_alias(
        State(state.clone()),
        auth_headers(TEST_OWNER_EMAIL)?,
        Path(alias_id),
    )
    .await
    .into_response();
    let missing = delete_team_alias(State(state), auth_headers(TEST_OWNER_EMAIL)?, Path(alias_id))
        .await
        .into_response();

    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}
