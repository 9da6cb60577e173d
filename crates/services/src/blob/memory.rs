use std::collections::HashMap;

use async_trait::async_trait;
use streetcode_core::hashing::blob_name;
use tokio::sync::RwLock;

use super::{check_name, decode_base64, name_salt, BlobError, BlobStorage};

/// Blob store kept in a map. Used by tests.
#[derive(Debug, Default)]
pub struct MemoryBlobStorage {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bytes under a fixed name.
    pub async fn insert(&self, name: &str, bytes: impl Into<Vec<u8>>) {
        self.blobs.write().await.insert(name.to_string(), bytes.into());
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.blobs.read().await.contains_key(name)
    }
}

#[async_trait]
impl BlobStorage for MemoryBlobStorage {
    async fn find_file(&self, name: &str) -> Result<Vec<u8>, BlobError> {
        self.blobs
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| BlobError::NotFound(name.to_string()))
    }

    async fn save_file(
        &self,
        base64: &str,
        name: &str,
        extension: &str,
    ) -> Result<String, BlobError> {
        let bytes = decode_base64(base64)?;
        let stored_name = blob_name(&bytes, &name_salt(name), extension);
        check_name(&stored_name)?;
        self.blobs.write().await.insert(stored_name.clone(), bytes);
        Ok(stored_name)
    }

    async fn delete_file(&self, name: &str) -> Result<(), BlobError> {
        match self.blobs.write().await.remove(name) {
            Some(_) => Ok(()),
            None => Err(BlobError::NotFound(name.to_string())),
        }
    }
}
