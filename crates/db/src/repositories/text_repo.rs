//! Repository for the `texts` table.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::text::Text;

/// Column list for `texts` queries.
const COLUMNS: &str = "id, streetcode_id, title, text_content, additional_text";

#[async_trait]
pub trait TextRepository: Send + Sync {
    async fn list_all(&self) -> RepoResult<Vec<Text>>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Text>>;

    async fn find_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Option<Text>>;
}

/// PostgreSQL implementation of [`TextRepository`].
#[derive(Clone)]
pub struct PgTextRepo {
    pool: PgPool,
}

impl PgTextRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TextRepository for PgTextRepo {
    async fn list_all(&self) -> RepoResult<Vec<Text>> {
        let query = format!("SELECT {COLUMNS} FROM texts ORDER BY id");
        sqlx::query_as::<_, Text>(&query).fetch_all(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Text>> {
        let query = format!("SELECT {COLUMNS} FROM texts WHERE id = $1");
        sqlx::query_as::<_, Text>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Option<Text>> {
        let query = format!("SELECT {COLUMNS} FROM texts WHERE streetcode_id = $1");
        sqlx::query_as::<_, Text>(&query)
            .bind(streetcode_id)
            .fetch_optional(&self.pool)
            .await
    }
}
