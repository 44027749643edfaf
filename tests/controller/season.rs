use almanac::server::controller::{
    championship::get_championship_stats,
    season::{get_season, get_seasons},
};

use super::*;

/// Expect 200 OK for an existing season
#[tokio::test]
async fn get_season_success() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let team = test.league().insert_team("Zebras", true).await?;
    test.league()
        .insert_season(SeasonFixture::new(2020).champion(team.id))
        .await?;

    let resp = get_season(State(test.into_app_state()), Path(2020))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a year without a season
#[tokio::test]
async fn get_season_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let resp = get_season(State(test.into_app_state()), Path(1990))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when tables are missing
#[tokio::test]
async fn get_seasons_database_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_seasons(State(test.into_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 OK for championship stats of an empty league
#[tokio::test]
async fn championship_stats_empty_league() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let resp = get_championship_stats(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
