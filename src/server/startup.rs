use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, PhotoStorageBackend},
    error::Error,
    storage::{FilesystemPhotoStorage, MemoryPhotoStorage, PhotoStorage},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the configured photo storage backend
///
/// The filesystem backend's root directory is created if it does not exist yet.
pub async fn build_photo_storage(config: &Config) -> Result<Arc<dyn PhotoStorage>, Error> {
    let storage: Arc<dyn PhotoStorage> = match &config.photo_storage {
        PhotoStorageBackend::Filesystem(root) => {
            tokio::fs::create_dir_all(root).await?;

            tracing::info!("Storing photos beneath {}", root.display());

            Arc::new(FilesystemPhotoStorage::new(
                root.clone(),
                &config.photo_public_url,
            ))
        }
        PhotoStorageBackend::Memory => {
            tracing::warn!("Storing photos in memory, uploads will be lost on restart");

            Arc::new(MemoryPhotoStorage::new(&config.photo_public_url))
        }
    };

    Ok(storage)
}
