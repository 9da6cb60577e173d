//! Repository for the `terms` and `related_terms` tables.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::term::{RelatedTerm, Term};

#[async_trait]
pub trait TermRepository: Send + Sync {
    async fn list_terms(&self) -> RepoResult<Vec<Term>>;

    async fn find_term(&self, id: DbId) -> RepoResult<Option<Term>>;

    async fn list_related(&self, term_id: DbId) -> RepoResult<Vec<RelatedTerm>>;

    /// Every related word across all terms.
    async fn list_all_related(&self) -> RepoResult<Vec<RelatedTerm>>;

    async fn find_related(&self, term_id: DbId, word: &str) -> RepoResult<Option<RelatedTerm>>;

    async fn find_related_by_word(&self, word: &str) -> RepoResult<Option<RelatedTerm>>;

    async fn create_related(&self, term_id: DbId, word: &str) -> RepoResult<RelatedTerm>;

    async fn delete_related(&self, id: DbId) -> RepoResult<u64>;
}

/// PostgreSQL implementation of [`TermRepository`].
#[derive(Clone)]
pub struct PgTermRepo {
    pool: PgPool,
}

impl PgTermRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TermRepository for PgTermRepo {
    async fn list_terms(&self) -> RepoResult<Vec<Term>> {
        sqlx::query_as::<_, Term>("SELECT id, title, description FROM terms ORDER BY title")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_term(&self, id: DbId) -> RepoResult<Option<Term>> {
        sqlx::query_as::<_, Term>("SELECT id, title, description FROM terms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_related(&self, term_id: DbId) -> RepoResult<Vec<RelatedTerm>> {
        sqlx::query_as::<_, RelatedTerm>(
            "SELECT id, term_id, word FROM related_terms WHERE term_id = $1 ORDER BY id",
        )
        .bind(term_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn list_all_related(&self) -> RepoResult<Vec<RelatedTerm>> {
        sqlx::query_as::<_, RelatedTerm>("SELECT id, term_id, word FROM related_terms ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_related(&self, term_id: DbId, word: &str) -> RepoResult<Option<RelatedTerm>> {
        sqlx::query_as::<_, RelatedTerm>(
            "SELECT id, term_id, word FROM related_terms WHERE term_id = $1 AND word = $2",
        )
        .bind(term_id)
        .bind(word)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_related_by_word(&self, word: &str) -> RepoResult<Option<RelatedTerm>> {
        sqlx::query_as::<_, RelatedTerm>(
            "SELECT id, term_id, word FROM related_terms WHERE word = $1 ORDER BY id LIMIT 1",
        )
        .bind(word)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_related(&self, term_id: DbId, word: &str) -> RepoResult<RelatedTerm> {
        sqlx::query_as::<_, RelatedTerm>(
            "INSERT INTO related_terms (term_id, word) VALUES ($1, $2) \
             RETURNING id, term_id, word",
        )
        .bind(term_id)
        .bind(word)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_related(&self, id: DbId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM related_terms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
