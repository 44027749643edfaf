use almanac::{
    model::photo::DeletePhotoDto,
    server::controller::photo::{delete_photo, get_season_photos},
};

use super::*;

/// Expect 200 OK for a season's photos
#[tokio::test]
async fn get_season_photos_success() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (_, owner) = test.league().insert_owned_team("Zebras", false).await?;
    let season = test.league().insert_season(SeasonFixture::new(2020)).await?;
    test.league()
        .insert_photo(season.id, owner.id, "drafts/2020/a.jpg", true)
        .await?;

    let resp = get_season_photos(State(test.into_app_state()), Path(2020))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden when deleting another owner's photo
#[tokio::test]
async fn delete_other_owners_photo() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (_, uploader) = test
        .league()
        .insert_owned_team_with_email("Zebras", "uploader@example.com", false)
        .await?;
    test.league().insert_owned_team("Aardvarks", false).await?;
    let season = test.league().insert_season(SeasonFixture::new(2020)).await?;
    let photo = test
        .league()
        .insert_photo(season.id, uploader.id, "drafts/2020/a.jpg", true)
        .await?;

    let resp = delete_photo(
        State(test.into_app_state()),
        auth_headers(TEST_OWNER_EMAIL)?,
        Path(photo.id),
        Json(DeletePhotoDto {
            storage_key: photo.storage_key,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 403 Forbidden for a valid token whose email is not an approved owner
#[tokio::test]
async fn delete_as_unapproved_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (_, owner) = test.league().insert_owned_team("Zebras", false).await?;
    let season = test.league().insert_season(SeasonFixture::new(2020)).await?;
    let photo = test
        .league()
        .insert_photo(season.id, owner.id, "drafts/2020/a.jpg", true)
        .await?;

    let resp = delete_photo(
        State(test.into_app_state()),
        auth_headers("stranger@example.com")?,
        Path(photo.id),
        Json(DeletePhotoDto {
            storage_key: photo.storage_key,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
