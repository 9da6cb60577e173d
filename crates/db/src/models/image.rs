//! Image and image detail rows.

use sqlx::FromRow;
use streetcode_core::types::{DbId, Timestamp};

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: DbId,
    pub blob_name: Option<String>,
    pub mime_type: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `image_details` table. `alt` doubles as the image role
/// marker on streetcode pages.
#[derive(Debug, Clone, FromRow)]
pub struct ImageDetails {
    pub id: DbId,
    pub image_id: DbId,
    pub title: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewImage {
    pub blob_name: String,
    pub mime_type: String,
}

#[derive(Debug, Clone)]
pub struct NewImageDetails {
    pub image_id: DbId,
    pub title: Option<String>,
    pub alt: Option<String>,
}
