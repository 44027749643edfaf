use std::{io, path::PathBuf};

use async_trait::async_trait;

use super::{key::is_safe_key, PhotoStorage};

/// Stores photo objects as files below a root directory.
///
/// Objects are served back by the `/media` route, so view URLs are built from the configured
/// public URL prefix.
pub struct FilesystemPhotoStorage {
    root: PathBuf,
    public_url: String,
}

impl FilesystemPhotoStorage {
    pub fn new(root: PathBuf, public_url: impl Into<String>) -> Self {
        Self {
            root,
            public_url: public_url.into(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, io::Error> {
        if !is_safe_key(key) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("storage key escapes storage root: {}", key),
            ));
        }

        Ok(self.root.join(key))
    }
}

#[async_trait]
impl PhotoStorage for FilesystemPhotoStorage {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), io::Error> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, bytes).await
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, io::Error> {
        let path = self.path_for(key)?;

        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), io::Error> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn view_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }
}
