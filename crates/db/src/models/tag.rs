//! Tag rows and streetcode-tag links.

use sqlx::FromRow;
use streetcode_core::types::DbId;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow)]
pub struct Tag {
    pub id: DbId,
    pub title: String,
}

/// A tag as attached to a streetcode (`tags` joined with `streetcode_tag_index`).
#[derive(Debug, Clone, FromRow)]
pub struct StreetcodeTag {
    pub id: DbId,
    pub title: String,
    pub is_visible: bool,
    pub index: i32,
}

/// A tag to attach on streetcode write. `tag_id` of `None` creates the tag
/// by title (or reuses an existing tag with the same title).
#[derive(Debug, Clone)]
pub struct TagLink {
    pub tag_id: Option<DbId>,
    pub title: String,
    pub is_visible: bool,
    pub index: i32,
}
