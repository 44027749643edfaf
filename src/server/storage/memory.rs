use std::{collections::HashMap, io};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::PhotoStorage;

/// Keeps photo objects in process memory.
///
/// Objects are lost on restart; used for local development and tests.
pub struct MemoryPhotoStorage {
    objects: RwLock<HashMap<String, Vec<u8>>>,
    public_url: String,
}

impl MemoryPhotoStorage {
    pub fn new(public_url: impl Into<String>) -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            public_url: public_url.into(),
        }
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl PhotoStorage for MemoryPhotoStorage {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), io::Error> {
        self.objects.write().await.insert(key.to_string(), bytes);

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, io::Error> {
        Ok(self.objects.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), io::Error> {
        self.objects.write().await.remove(key);

        Ok(())
    }

    fn view_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }
}
