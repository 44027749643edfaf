use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::DraftPhotoModel;

/// Metadata for a photo whose object has already been written to storage
pub struct NewDraftPhoto<'a> {
    pub season_id: i32,
    pub storage_key: &'a str,
    pub filename: &'a str,
    pub caption: Option<&'a str>,
    pub uploaded_by: i32,
}

pub struct DraftPhotoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DraftPhotoRepository<'a, C> {
    /// Creates a new instance of [`DraftPhotoRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an uploaded photo, approved on insert
    pub async fn create(&self, photo: NewDraftPhoto<'_>) -> Result<DraftPhotoModel, DbErr> {
        let draft_photo = entity::draft_photo::ActiveModel {
            season_id: ActiveValue::Set(photo.season_id),
            storage_key: ActiveValue::Set(photo.storage_key.to_string()),
            filename: ActiveValue::Set(photo.filename.to_string()),
            caption: ActiveValue::Set(photo.caption.map(str::to_string)),
            uploaded_by: ActiveValue::Set(photo.uploaded_by),
            is_approved: ActiveValue::Set(true),
            uploaded_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        draft_photo.insert(self.db).await
    }

    pub async fn get_by_id(&self, photo_id: i32) -> Result<Option<DraftPhotoModel>, DbErr> {
        entity::prelude::DraftPhoto::find_by_id(photo_id)
            .one(self.db)
            .await
    }

    /// Gets a season's approved photos, newest upload first
    pub async fn get_approved_by_season(
        &self,
        season_id: i32,
    ) -> Result<Vec<DraftPhotoModel>, DbErr> {
        entity::prelude::DraftPhoto::find()
            .filter(entity::draft_photo::Column::SeasonId.eq(season_id))
            .filter(entity::draft_photo::Column::IsApproved.eq(true))
            .order_by_desc(entity::draft_photo::Column::UploadedAt)
            .order_by_desc(entity::draft_photo::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the approved photo recorded under a storage key
    pub async fn get_approved_by_storage_key(
        &self,
        storage_key: &str,
    ) -> Result<Option<DraftPhotoModel>, DbErr> {
        entity::prelude::DraftPhoto::find()
            .filter(entity::draft_photo::Column::StorageKey.eq(storage_key))
            .filter(entity::draft_photo::Column::IsApproved.eq(true))
            .one(self.db)
            .await
    }

    /// Deletes photo metadata
    ///
    /// Returns OK regardless of the photo existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, photo_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DraftPhoto::delete_by_id(photo_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use almanac_test_utils::prelude::*;

        use crate::server::data::draft_photo::{DraftPhotoRepository, NewDraftPhoto};

        /// Expect the photo to be stored approved
        #[tokio::test]
        async fn creates_approved_photo() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            let (_, owner) = test.league().insert_owned_team("Zebras", false).await?;
            let season = test.league().insert_season(SeasonFixture::new(2021)).await?;

            let photo_repo = DraftPhotoRepository::new(&test.db);
            let photo = photo_repo
                .create(NewDraftPhoto {
                    season_id: season.id,
                    storage_key: "drafts/2021/a.jpg",
                    filename: "draft night.jpg",
                    caption: Some("Round one"),
                    uploaded_by: owner.id,
                })
                .await?;

            assert!(photo.is_approved);
            assert_eq!(photo.uploaded_by, owner.id);
            assert_eq!(photo.caption.as_deref(), Some("Round one"));

            Ok(())
        }

        /// Expect Error when the storage key is already recorded
        #[tokio::test]
        async fn fails_for_duplicate_storage_key() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            let (_, owner) = test.league().insert_owned_team("Zebras", false).await?;
            let season = test.league().insert_season(SeasonFixture::new(2021)).await?;
            test.league()
                .insert_photo(season.id, owner.id, "drafts/2021/a.jpg", true)
                .await?;

            let photo_repo = DraftPhotoRepository::new(&test.db);
            let result = photo_repo
                .create(NewDraftPhoto {
                    season_id: season.id,
                    storage_key: "drafts/2021/a.jpg",
                    filename: "again.jpg",
                    caption: None,
                    uploaded_by: owner.id,
                })
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_approved_by_season {
        use almanac_test_utils::prelude::*;

        use crate::server::data::draft_photo::DraftPhotoRepository;

        /// Expect only approved photos of the requested season
        #[tokio::test]
        async fn excludes_unapproved_and_other_seasons() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            let (_, owner) = test.league().insert_owned_team("Zebras", false).await?;
            let season = test.league().insert_season(SeasonFixture::new(2021)).await?;
            let other = test.league().insert_season(SeasonFixture::new(2022)).await?;
            let approved = test
                .league()
                .insert_photo(season.id, owner.id, "drafts/2021/a.jpg", true)
                .await?;
            test.league()
                .insert_photo(season.id, owner.id, "drafts/2021/b.jpg", false)
                .await?;
            test.league()
                .insert_photo(other.id, owner.id, "drafts/2022/c.jpg", true)
                .await?;

            let photo_repo = DraftPhotoRepository::new(&test.db);
            let photos = photo_repo.get_approved_by_season(season.id).await?;

            assert_eq!(photos, vec![approved]);

            Ok(())
        }
    }

    mod get_approved_by_storage_key {
        use almanac_test_utils::prelude::*;

        use crate::server::data::draft_photo::DraftPhotoRepository;

        /// Expect only an approved photo to be found by its key
        #[tokio::test]
        async fn finds_only_approved_photo() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            let (_, owner) = test.league().insert_owned_team("Zebras", false).await?;
            let season = test.league().insert_season(SeasonFixture::new(2021)).await?;
            let approved = test
                .league()
                .insert_photo(season.id, owner.id, "drafts/2021/a.jpg", true)
                .await?;
            test.league()
                .insert_photo(season.id, owner.id, "drafts/2021/b.jpg", false)
                .await?;

            let photo_repo = DraftPhotoRepository::new(&test.db);

            let found = photo_repo
                .get_approved_by_storage_key("drafts/2021/a.jpg")
                .await?;
            assert_eq!(found.map(|p| p.id), Some(approved.id));
            assert!(photo_repo
                .get_approved_by_storage_key("drafts/2021/b.jpg")
                .await?
                .is_none());
            assert!(photo_repo
                .get_approved_by_storage_key("drafts/2021/c.jpg")
                .await?
                .is_none());

            Ok(())
        }
    }

    mod delete {
        use almanac_test_utils::prelude::*;

        use crate::server::data::draft_photo::DraftPhotoRepository;

        /// Expect the photo row to be removed
        #[tokio::test]
        async fn deletes_existing_photo() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            let (_, owner) = test.league().insert_owned_team("Zebras", false).await?;
            let season = test.league().insert_season(SeasonFixture::new(2021)).await?;
            let photo = test
                .league()
                .insert_photo(season.id, owner.id, "drafts/2021/a.jpg", true)
                .await?;

            let photo_repo = DraftPhotoRepository::new(&test.db);
            let result = photo_repo.delete(photo.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(photo_repo.get_by_id(photo.id).await?.is_none());

            Ok(())
        }
    }
}
