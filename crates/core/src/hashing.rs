//! SHA-256 helpers used for content-addressed blob names.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Derive a blob name from its content and a salt (normally the upload
/// timestamp), so re-uploading identical bytes still yields a fresh name.
pub fn blob_name(content: &[u8], salt: &str, extension: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hasher.update(salt.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        digest
    } else {
        format!("{digest}.{extension}")
    }
}
