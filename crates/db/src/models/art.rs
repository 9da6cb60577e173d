use sqlx::FromRow;
use streetcode_core::types::DbId;

/// A row from the `arts` table.
#[derive(Debug, Clone, FromRow)]
pub struct Art {
    pub id: DbId,
    pub image_id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A row from the `streetcode_arts` link table.
#[derive(Debug, Clone, FromRow)]
pub struct StreetcodeArt {
    pub id: DbId,
    pub streetcode_id: DbId,
    pub art_id: DbId,
    pub index: i32,
}
