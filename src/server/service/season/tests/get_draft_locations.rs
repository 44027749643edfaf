use super::*;

/// Expect locations ordered by city with ascending years, unused locations left out
#[tokio::test]
async fn groups_years_by_location() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let wildwood = test.league().insert_draft_location("Wildwood").await?;
    let atlantic_city = test.league().insert_draft_location("Atlantic City").await?;
    test.league().insert_draft_location("Never Used").await?;
    test.league()
        .insert_season(SeasonFixture::new(2021).drafted_at(wildwood.id))
        .await?;
    test.league()
        .insert_season(SeasonFixture::new(2015).drafted_at(wildwood.id))
        .await?;
    test.league()
        .insert_season(SeasonFixture::new(2018).drafted_at(atlantic_city.id))
        .await?;
    test.league().insert_season(SeasonFixture::new(2019)).await?;

    let season_service = SeasonService::new(&test.db);
    let locations = season_service.get_draft_locations().await.unwrap();

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].city, "Atlantic City");
    assert_eq!(locations[0].years, vec![2018]);
    assert_eq!(locations[1].city, "Wildwood");
    assert_eq!(locations[1].years, vec![2015, 2021]);

    Ok(())
}
