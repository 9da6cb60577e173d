use sqlx::FromRow;
use streetcode_core::types::{DbId, Timestamp};

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow)]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub text: String,
    pub url: String,
    pub image_id: Option<DbId>,
    pub creation_date: Timestamp,
}

/// Fields written on news create and update.
#[derive(Debug, Clone)]
pub struct NewsInput {
    pub title: String,
    pub text: String,
    pub url: String,
    pub image_id: Option<DbId>,
    pub creation_date: Timestamp,
}
