//! Draft photo service.
//!
//! Photo bytes go to a [`PhotoStorage`] backend and photo metadata to the database. Uploads
//! write the object before recording metadata and remove it again if the metadata insert
//! fails. Deletes remove the object before the metadata, so a failed metadata delete leaves a
//! row pointing at a missing object. That case is logged.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::photo::{PhotoDto, ViewUrlsDto},
    server::{
        data::{
            draft_photo::{DraftPhotoRepository, NewDraftPhoto},
            season::SeasonRepository,
        },
        error::{league::LeagueError, photo::PhotoError, Error},
        model::{
            db::{DraftPhotoModel, SeasonModel},
            owner::OwnerContext,
        },
        service::retry::RetryContext,
        storage::{
            key::{
                content_type_for_key, file_extension, is_allowed_content_type,
                is_allowed_extension, is_safe_key, photo_key,
            },
            PhotoStorage,
        },
    },
};

/// Max storage keys accepted by a single view URL request
pub const MAX_VIEW_URL_KEYS: usize = 100;

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn PhotoStorage,
}

impl<'a> PhotoService<'a> {
    /// Creates a new instance of PhotoService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `storage` - Backend holding photo objects
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn PhotoStorage) -> Self {
        Self { db, storage }
    }

    /// Approved photos of the season played in `year`, newest upload first.
    ///
    /// # Returns
    /// - `Ok(Vec<PhotoDto>)` - Photos with view URLs
    /// - `Err(Error::LeagueError(LeagueError::SeasonNotFound))` - No season for that year
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_photos_by_season(&self, year: i32) -> Result<Vec<PhotoDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        let photos = ctx
            .execute_with_retry(&format!("get photos for {}", year), || {
                let db = db.clone();

                Box::pin(async move {
                    let Some(season) = SeasonRepository::new(&db).find_by_year(year).await? else {
                        return Err(LeagueError::SeasonNotFound(year).into());
                    };

                    Ok(DraftPhotoRepository::new(&db)
                        .get_approved_by_season(season.id)
                        .await?)
                })
            })
            .await?;

        Ok(photos.into_iter().map(|photo| self.photo_dto(photo)).collect())
    }

    /// Stores an uploaded photo and records it for the season played in `year`.
    ///
    /// Validation happens before anything is written: content type, then file extension,
    /// then the season.
    ///
    /// # Arguments
    /// - `owner` - Approved owner uploading the photo
    /// - `year` - Season year the photo belongs to
    /// - `filename` - Original filename, used for its extension
    /// - `caption` - Optional caption shown with the photo
    /// - `content_type` - Content type declared by the client
    /// - `bytes` - Photo contents
    ///
    /// # Returns
    /// - `Ok(PhotoDto)` - Photo stored and recorded
    /// - `Err(Error::PhotoError(PhotoError::UnsupportedContentType))` - Not a JPEG or PNG
    /// - `Err(Error::PhotoError(PhotoError::InvalidExtension))` - Filename extension not allowed
    /// - `Err(Error::LeagueError(LeagueError::SeasonNotFound))` - No season for that year
    /// - `Err(Error::StorageError)` - Object write failed, nothing was recorded
    /// - `Err(Error::DbErr)` - Recording metadata failed after retries; the stored object is
    ///   removed again
    pub async fn upload_photo(
        &self,
        owner: &OwnerContext,
        year: i32,
        filename: &str,
        caption: Option<&str>,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<PhotoDto, Error> {
        if !is_allowed_content_type(content_type) {
            return Err(PhotoError::UnsupportedContentType(content_type.to_string()).into());
        }

        let extension = file_extension(filename)
            .filter(|extension| is_allowed_extension(extension))
            .ok_or_else(|| PhotoError::InvalidExtension(filename.to_string()))?;

        let season_id = self.find_season(year).await?.id;

        let storage_key = photo_key(year, &extension);
        self.storage.put(&storage_key, bytes).await?;

        let ctx = RetryContext::new();
        let db = self.db.clone();
        let owner_id = owner.owner_id;
        let filename = filename.to_string();
        // Blank captions are stored as no caption
        let caption = caption
            .map(str::trim)
            .filter(|caption| !caption.is_empty())
            .map(str::to_string);
        let key = storage_key.clone();

        let result = ctx
            .execute_with_retry(&format!("record photo {}", storage_key), || {
                let db = db.clone();
                let filename = filename.clone();
                let caption = caption.clone();
                let key = key.clone();

                Box::pin(async move {
                    Ok(DraftPhotoRepository::new(&db)
                        .create(NewDraftPhoto {
                            season_id,
                            storage_key: &key,
                            filename: &filename,
                            caption: caption.as_deref(),
                            uploaded_by: owner_id,
                        })
                        .await?)
                })
            })
            .await;

        let photo = match result {
            Ok(photo) => photo,
            Err(e) => {
                tracing::warn!(
                    "Stored object {} but failed to record its metadata: {}",
                    storage_key,
                    e
                );

                if let Err(delete_err) = self.storage.delete(&storage_key).await {
                    tracing::warn!(
                        "Failed to remove unrecorded object {}: {}",
                        storage_key,
                        delete_err
                    );
                }

                return Err(e);
            }
        };

        tracing::info!(
            "Approved owner ID {} uploaded photo ID {} for {}",
            owner.owner_id,
            photo.id,
            year
        );

        Ok(self.photo_dto(photo))
    }

    /// Deletes a photo uploaded by `owner`.
    ///
    /// # Arguments
    /// - `owner` - Approved owner requesting the delete
    /// - `photo_id` - Photo to delete
    /// - `storage_key` - Storage key the client believes the photo has
    ///
    /// # Returns
    /// - `Ok(())` - Object and metadata removed
    /// - `Err(Error::PhotoError(PhotoError::PhotoNotFound))` - No photo with that ID
    /// - `Err(Error::PhotoError(PhotoError::NotUploader))` - Photo was uploaded by another owner
    /// - `Err(Error::PhotoError(PhotoError::StorageKeyMismatch))` - Key differs from the stored one
    /// - `Err(Error::StorageError)` - Object removal failed, metadata left untouched
    /// - `Err(Error::DbErr)` - Metadata removal failed after the object was removed
    pub async fn delete_photo(
        &self,
        owner: &OwnerContext,
        photo_id: i32,
        storage_key: &str,
    ) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        let photo = ctx
            .execute_with_retry(&format!("get photo ID {}", photo_id), || {
                let db = db.clone();

                Box::pin(async move {
                    Ok(DraftPhotoRepository::new(&db).get_by_id(photo_id).await?)
                })
            })
            .await?
            .ok_or(PhotoError::PhotoNotFound(photo_id))?;

        if photo.uploaded_by != owner.owner_id {
            return Err(PhotoError::NotUploader {
                photo_id,
                owner_id: owner.owner_id,
            }
            .into());
        }

        if photo.storage_key != storage_key {
            return Err(PhotoError::StorageKeyMismatch(photo_id).into());
        }

        self.storage.delete(&photo.storage_key).await?;

        let result = ctx
            .execute_with_retry(&format!("delete photo ID {}", photo_id), || {
                let db = db.clone();

                Box::pin(async move {
                    Ok(DraftPhotoRepository::new(&db).delete(photo_id).await?)
                })
            })
            .await;

        if let Err(e) = result {
            tracing::warn!(
                "Removed object {} but failed to delete metadata for photo ID {}: {}",
                photo.storage_key,
                photo_id,
                e
            );

            return Err(e);
        }

        tracing::info!(
            "Approved owner ID {} deleted photo ID {}",
            owner.owner_id,
            photo_id
        );

        Ok(())
    }

    /// View URLs for a batch of storage keys.
    ///
    /// # Returns
    /// - `Ok(ViewUrlsDto)` - URL for every key
    /// - `Err(Error::PhotoError(PhotoError::InvalidKeyBatch))` - Empty batch or more than
    ///   [`MAX_VIEW_URL_KEYS`] keys
    /// - `Err(Error::PhotoError(PhotoError::InvalidStorageKey))` - A key is not a relative path
    pub fn get_view_urls(&self, storage_keys: &[String]) -> Result<ViewUrlsDto, Error> {
        if storage_keys.is_empty() || storage_keys.len() > MAX_VIEW_URL_KEYS {
            return Err(PhotoError::InvalidKeyBatch {
                received: storage_keys.len(),
                max: MAX_VIEW_URL_KEYS,
            }
            .into());
        }

        if let Some(key) = storage_keys.iter().find(|key| !is_safe_key(key)) {
            return Err(PhotoError::InvalidStorageKey(key.clone()).into());
        }

        let urls: BTreeMap<String, String> = storage_keys
            .iter()
            .map(|key| (key.clone(), self.storage.view_url(key)))
            .collect();

        Ok(ViewUrlsDto { urls })
    }

    /// Object bytes and content type for an approved photo's storage key.
    ///
    /// Objects are only served while an approved photo is recorded under their key, so an
    /// object left behind by a removed or unapproved photo is reported as missing.
    ///
    /// # Returns
    /// - `Ok((content_type, bytes))` - Object of an approved photo
    /// - `Err(Error::PhotoError(PhotoError::ObjectNotFound))` - Not a photo key, no approved
    ///   photo recorded under it, or no stored object
    /// - `Err(Error::StorageError)` - Object read failed
    pub async fn get_object(&self, storage_key: &str) -> Result<(&'static str, Vec<u8>), Error> {
        let content_type = is_safe_key(storage_key)
            .then(|| content_type_for_key(storage_key))
            .flatten()
            .ok_or_else(|| PhotoError::ObjectNotFound(storage_key.to_string()))?;

        let ctx = RetryContext::new();
        let db = self.db.clone();
        let key = storage_key.to_string();

        let photo = ctx
            .execute_with_retry(&format!("get photo by key {}", storage_key), || {
                let db = db.clone();
                let key = key.clone();

                Box::pin(async move {
                    Ok(DraftPhotoRepository::new(&db)
                        .get_approved_by_storage_key(&key)
                        .await?)
                })
            })
            .await?;
        if photo.is_none() {
            return Err(PhotoError::ObjectNotFound(storage_key.to_string()).into());
        }

        let bytes = self
            .storage
            .get(storage_key)
            .await?
            .ok_or_else(|| PhotoError::ObjectNotFound(storage_key.to_string()))?;

        Ok((content_type, bytes))
    }

    async fn find_season(&self, year: i32) -> Result<SeasonModel, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get season {}", year), || {
            let db = db.clone();

            Box::pin(async move { Ok(SeasonRepository::new(&db).find_by_year(year).await?) })
        })
        .await?
        .ok_or_else(|| LeagueError::SeasonNotFound(year).into())
    }

    fn photo_dto(&self, photo: DraftPhotoModel) -> PhotoDto {
        PhotoDto {
            url: self.storage.view_url(&photo.storage_key),
            id: photo.id,
            storage_key: photo.storage_key,
            filename: photo.filename,
            caption: photo.caption,
            uploaded_at: photo.uploaded_at,
            uploaded_by: photo.uploaded_by,
        }
    }
}
