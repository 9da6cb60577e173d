//! Dictionary terms and their alternative spellings.

use sqlx::FromRow;
use streetcode_core::types::DbId;

/// A row from the `terms` table.
#[derive(Debug, Clone, FromRow)]
pub struct Term {
    pub id: DbId,
    pub title: String,
    pub description: String,
}

/// A row from the `related_terms` table.
#[derive(Debug, Clone, FromRow)]
pub struct RelatedTerm {
    pub id: DbId,
    pub term_id: DbId,
    pub word: String,
}
