use super::*;

/// Expect only approved photos of the season, newest first, with view URLs
#[tokio::test]
async fn returns_approved_photos() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (_, owner) = test.league().insert_owned_team("Zebras", false).await?;
    let season = test.league().insert_season(SeasonFixture::new(2020)).await?;
    let other = test.league().insert_season(SeasonFixture::new(2021)).await?;
    let first = test
        .league()
        .insert_photo(season.id, owner.id, "drafts/2020/first.jpg", true)
        .await?;
    let second = test
        .league()
        .insert_photo(season.id, owner.id, "drafts/2020/second.jpg", true)
        .await?;
    test.league()
        .insert_photo(season.id, owner.id, "drafts/2020/pending.jpg", false)
        .await?;
    test.league()
        .insert_photo(other.id, owner.id, "drafts/2021/other.jpg", true)
        .await?;

    let storage = MemoryPhotoStorage::new(PUBLIC_URL);
    let photo_service = PhotoService::new(&test.db, &storage);
    let photos = photo_service.get_photos_by_season(2020).await.unwrap();

    let ids: Vec<i32> = photos.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(photos[1].url, "/media/drafts/2020/first.jpg");

    Ok(())
}

/// Expect SeasonNotFound for an unknown year
#[tokio::test]
async fn fails_for_unknown_year() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let storage = MemoryPhotoStorage::new(PUBLIC_URL);
    let photo_service = PhotoService::new(&test.db, &storage);
    let result = photo_service.get_photos_by_season(1990).await;

    assert!(matches!(
        result,
        Err(Error::LeagueError(LeagueError::SeasonNotFound(1990)))
    ));

    Ok(())
}
