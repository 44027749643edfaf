//! Photo object storage.
//!
//! Photos are stored under opaque keys of the form `drafts/<year>/<uuid>.<ext>`. Storage only
//! holds the bytes; photo metadata lives in the database and references objects by key.

pub mod filesystem;
pub mod key;
pub mod memory;

use async_trait::async_trait;

pub use filesystem::FilesystemPhotoStorage;
pub use memory::MemoryPhotoStorage;

/// Backend holding photo objects.
#[async_trait]
pub trait PhotoStorage: Send + Sync + 'static {
    /// Writes an object, replacing any existing object under the same key.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), std::io::Error>;

    /// Reads an object, `Ok(None)` if nothing is stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, std::io::Error>;

    /// Removes an object. Removing a key that holds nothing succeeds.
    async fn delete(&self, key: &str) -> Result<(), std::io::Error>;

    /// URL clients use to view the object.
    fn view_url(&self, key: &str) -> String;
}
