use sqlx::FromRow;
use streetcode_core::types::{DbId, Timestamp};

/// A row from the `audios` table.
#[derive(Debug, Clone, FromRow)]
pub struct Audio {
    pub id: DbId,
    pub title: Option<String>,
    pub blob_name: String,
    pub mime_type: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct NewAudio {
    pub title: Option<String>,
    pub blob_name: String,
    pub mime_type: String,
}
