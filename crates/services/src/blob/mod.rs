//! Blob storage for image and audio payloads.
//!
//! Blobs are addressed by name (`{sha256}.{ext}`); the database rows only
//! keep that name and a MIME type.

mod filesystem;
mod memory;

pub use filesystem::FileBlobStorage;
pub use memory::MemoryBlobStorage;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Blob name is not valid: {0}")]
    InvalidName(String),

    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Blob I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Blob encryption error: {0}")]
    Crypto(String),
}

#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Raw (decrypted) bytes of a blob.
    async fn find_file(&self, name: &str) -> Result<Vec<u8>, BlobError>;

    /// Decode `base64`, store it and return the generated blob name.
    ///
    /// `name` seeds the content hash together with the current time, so
    /// saving the same payload twice yields two distinct blobs.
    async fn save_file(&self, base64: &str, name: &str, extension: &str)
        -> Result<String, BlobError>;

    async fn delete_file(&self, name: &str) -> Result<(), BlobError>;

    /// Blob contents encoded as standard base64.
    async fn find_file_as_base64(&self, name: &str) -> Result<String, BlobError> {
        let bytes = self.find_file(name).await?;
        Ok(BASE64.encode(bytes))
    }
}

pub(crate) fn decode_base64(payload: &str) -> Result<Vec<u8>, BlobError> {
    Ok(BASE64.decode(payload.trim())?)
}

/// Blob names are a hex digest plus an extension; anything else could
/// escape the storage root.
pub(crate) fn check_name(name: &str) -> Result<(), BlobError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
        && !name.contains("..");
    if valid {
        Ok(())
    } else {
        Err(BlobError::InvalidName(name.to_string()))
    }
}

/// Salt for a new blob name: the caller-supplied name plus a timestamp.
pub(crate) fn name_salt(name: &str) -> String {
    format!("{name}{}", chrono::Utc::now().format("%Y-%m-%d-%H:%M:%S%.f"))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn rejects_path_traversal_names() {
        assert!(check_name("abc123.png").is_ok());
        assert_matches!(check_name("../secret"), Err(BlobError::InvalidName(_)));
        assert_matches!(check_name("a/b.png"), Err(BlobError::InvalidName(_)));
        assert_matches!(check_name(""), Err(BlobError::InvalidName(_)));
    }

    #[test]
    fn decode_tolerates_surrounding_whitespace() {
        assert_eq!(decode_base64(" aGVsbG8=\n").unwrap(), b"hello");
        assert_matches!(decode_base64("not base64!"), Err(BlobError::Decode(_)));
    }
}
