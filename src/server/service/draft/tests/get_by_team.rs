use super::*;

/// Expect the team's history ordered by season year
#[tokio::test]
async fn returns_history_oldest_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let zebras = test.league().insert_team("Zebras", true).await?;
    let later = test.league().insert_season(SeasonFixture::new(2022)).await?;
    let earlier = test.league().insert_season(SeasonFixture::new(2019)).await?;
    test.league().insert_draft_position(later.id, zebras.id, 3).await?;
    test.league().insert_draft_position(earlier.id, zebras.id, 7).await?;

    let draft_service = DraftService::new(&test.db);
    let history = draft_service.get_by_team(zebras.id).await.unwrap();

    let picks: Vec<(i32, i32)> = history.iter().map(|p| (p.year, p.draft_position)).collect();
    assert_eq!(picks, vec![(2019, 7), (2022, 3)]);

    Ok(())
}

/// Expect TeamNotFound for an unknown team
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let draft_service = DraftService::new(&test.db);
    let result = draft_service.get_by_team(42).await;

    assert!(matches!(
        result,
        Err(Error::LeagueError(LeagueError::TeamNotFound(42)))
    ));

    Ok(())
}
