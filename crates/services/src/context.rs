use std::sync::Arc;

use streetcode_db::repositories::RepositoryWrapper;

use crate::blob::BlobStorage;

/// Dependencies every request handler works against.
///
/// Cheap to clone; both fields are shared handles.
#[derive(Clone)]
pub struct AppContext {
    pub repos: Arc<dyn RepositoryWrapper>,
    pub blobs: Arc<dyn BlobStorage>,
}

impl AppContext {
    pub fn new(repos: Arc<dyn RepositoryWrapper>, blobs: Arc<dyn BlobStorage>) -> Self {
        Self { repos, blobs }
    }
}
