use sqlx::FromRow;
use streetcode_core::types::DbId;

/// A row from the `texts` table. Each streetcode has at most one text.
#[derive(Debug, Clone, FromRow)]
pub struct Text {
    pub id: DbId,
    pub streetcode_id: DbId,
    pub title: String,
    pub text_content: Option<String>,
    pub additional_text: Option<String>,
}
