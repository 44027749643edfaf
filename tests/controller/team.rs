use almanac::server::controller::team::{get_team, get_team_by_alias};

use super::*;

/// Expect 200 OK for an existing team and 404 for an unknown one
#[tokio::test]
async fn get_team_by_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let team = test.league().insert_team("Zebras", true).await?;
    let state = test.into_app_state();

    let found = get_team(State(state.clone()), Path(team.id))
        .await
        .into_response();
    let missing = get_team(State(state), Path(team.id + 100))
        .await
        .into_response();

    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an alias to resolve to its team and an unknown alias to return 404
#[tokio::test]
async fn resolve_alias() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let team = test.league().insert_team("Zebras", true).await?;
    test.league().insert_alias("Striped Horses", team.id).await?;
    let state = test.into_app_state();

    let found = get_team_by_alias(State(state.clone()), Path("Striped Horses".to_string()))
        .await
        .into_response();
    let missing = get_team_by_alias(State(state), Path("Nobody".to_string()))
        .await
        .into_response();

    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}
