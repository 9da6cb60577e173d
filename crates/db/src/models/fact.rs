use sqlx::FromRow;
use streetcode_core::types::DbId;

/// A row from the `facts` table.
#[derive(Debug, Clone, FromRow)]
pub struct Fact {
    pub id: DbId,
    pub streetcode_id: DbId,
    pub title: String,
    pub fact_content: String,
    pub image_id: Option<DbId>,
}

#[derive(Debug, Clone)]
pub struct NewFact {
    pub streetcode_id: DbId,
    pub title: String,
    pub fact_content: String,
    pub image_id: Option<DbId>,
}
