use serde::{Deserialize, Serialize};
use streetcode_core::types::DbId;
use streetcode_db::models::term::{RelatedTerm, Term};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDto {
    pub id: DbId,
    pub title: String,
    pub description: String,
}

impl From<Term> for TermDto {
    fn from(row: Term) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}

/// Alternative spelling of a term. `id` is ignored on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTermDto {
    #[serde(default)]
    pub id: DbId,
    pub term_id: DbId,
    pub word: String,
}

impl From<RelatedTerm> for RelatedTermDto {
    fn from(row: RelatedTerm) -> Self {
        Self {
            id: row.id,
            term_id: row.term_id,
            word: row.word,
        }
    }
}
