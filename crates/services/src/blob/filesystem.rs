use std::path::{Path, PathBuf};

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use streetcode_core::hashing::blob_name;

use super::{check_name, decode_base64, name_salt, BlobError, BlobStorage};

/// AES-GCM nonce length in bytes. The nonce is stored in front of the
/// ciphertext.
const NONCE_SIZE: usize = 12;

/// Blob store backed by a directory on disk.
///
/// With an encryption key configured, every blob is written as
/// `nonce || AES-256-GCM(ciphertext)`. The key is the SHA-256 digest of the
/// configured passphrase.
pub struct FileBlobStorage {
    root: PathBuf,
    cipher: Option<Aes256Gcm>,
}

impl FileBlobStorage {
    /// Create the store, creating `root` if it does not exist.
    pub async fn new(root: impl Into<PathBuf>, passphrase: Option<&str>) -> Result<Self, BlobError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        let cipher = passphrase.filter(|p| !p.is_empty()).map(|p| {
            let digest = Sha256::digest(p.as_bytes());
            Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&digest))
        });

        tracing::info!(
            root = %root.display(),
            encrypted = cipher.is_some(),
            "Blob storage ready",
        );

        Ok(Self { root, cipher })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, BlobError> {
        check_name(name)?;
        Ok(self.root.join(name))
    }

    fn seal(&self, plaintext: Vec<u8>) -> Result<Vec<u8>, BlobError> {
        let Some(cipher) = &self.cipher else {
            return Ok(plaintext);
        };
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_slice())
            .map_err(|e| BlobError::Crypto(e.to_string()))?;

        let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn open(&self, stored: Vec<u8>) -> Result<Vec<u8>, BlobError> {
        let Some(cipher) = &self.cipher else {
            return Ok(stored);
        };
        if stored.len() < NONCE_SIZE {
            return Err(BlobError::Crypto("blob is shorter than its nonce".into()));
        }
        let (nonce, ciphertext) = stored.split_at(NONCE_SIZE);
        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|e| BlobError::Crypto(e.to_string()))
    }
}

#[async_trait]
impl BlobStorage for FileBlobStorage {
    async fn find_file(&self, name: &str) -> Result<Vec<u8>, BlobError> {
        let path = self.path_for(name)?;
        let stored = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BlobError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        self.open(stored)
    }

    async fn save_file(
        &self,
        base64: &str,
        name: &str,
        extension: &str,
    ) -> Result<String, BlobError> {
        let bytes = decode_base64(base64)?;
        let stored_name = blob_name(&bytes, &name_salt(name), extension);
        let path = self.path_for(&stored_name)?;

        let sealed = self.seal(bytes)?;
        tokio::fs::write(&path, sealed).await?;

        tracing::debug!(blob = %stored_name, "Blob saved");
        Ok(stored_name)
    }

    async fn delete_file(&self, name: &str) -> Result<(), BlobError> {
        let path = self.path_for(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(blob = %name, "Blob deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BlobError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn plain_store_round_trips_and_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStorage::new(dir.path(), None).await.unwrap();

        let name = store.save_file("aGVsbG8=", "greeting", "txt").await.unwrap();
        assert!(name.ends_with(".txt"));
        assert_eq!(std::fs::read(dir.path().join(&name)).unwrap(), b"hello");
        assert_eq!(store.find_file_as_base64(&name).await.unwrap(), "aGVsbG8=");

        store.delete_file(&name).await.unwrap();
        assert_matches!(store.find_file(&name).await, Err(BlobError::NotFound(_)));
    }

    #[tokio::test]
    async fn encrypted_store_does_not_write_plaintext() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStorage::new(dir.path(), Some("blob-key")).await.unwrap();

        let name = store.save_file("aGVsbG8=", "greeting", "txt").await.unwrap();
        let on_disk = std::fs::read(dir.path().join(&name)).unwrap();
        assert_ne!(on_disk, b"hello");
        assert_eq!(on_disk.len(), NONCE_SIZE + 5 + 16);
        assert_eq!(store.find_file(&name).await.unwrap(), b"hello");

        let other_key = FileBlobStorage::new(dir.path(), Some("other-key")).await.unwrap();
        assert_matches!(other_key.find_file(&name).await, Err(BlobError::Crypto(_)));
    }

    #[tokio::test]
    async fn missing_blob_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStorage::new(dir.path(), None).await.unwrap();
        assert_matches!(store.find_file("abc.png").await, Err(BlobError::NotFound(_)));
        assert_matches!(store.delete_file("abc.png").await, Err(BlobError::NotFound(_)));
    }
}
