//! Source link categories and their per-streetcode content.

use sqlx::FromRow;
use streetcode_core::types::DbId;

/// A row from the `source_link_categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct SourceLinkCategory {
    pub id: DbId,
    pub title: String,
    pub image_id: Option<DbId>,
}

/// A row from the `streetcode_category_contents` table.
#[derive(Debug, Clone, FromRow)]
pub struct StreetcodeCategoryContent {
    pub source_link_category_id: DbId,
    pub streetcode_id: DbId,
    pub text: Option<String>,
}
