//! Repository for the `facts` table.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::fact::{Fact, NewFact};

/// Column list for `facts` queries.
const COLUMNS: &str = "id, streetcode_id, title, fact_content, image_id";

#[async_trait]
pub trait FactRepository: Send + Sync {
    async fn list_all(&self) -> RepoResult<Vec<Fact>>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Fact>>;

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Fact>>;

    async fn create(&self, input: &NewFact) -> RepoResult<Fact>;
}

/// PostgreSQL implementation of [`FactRepository`].
#[derive(Clone)]
pub struct PgFactRepo {
    pool: PgPool,
}

impl PgFactRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FactRepository for PgFactRepo {
    async fn list_all(&self) -> RepoResult<Vec<Fact>> {
        let query = format!("SELECT {COLUMNS} FROM facts ORDER BY id");
        sqlx::query_as::<_, Fact>(&query).fetch_all(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Fact>> {
        let query = format!("SELECT {COLUMNS} FROM facts WHERE id = $1");
        sqlx::query_as::<_, Fact>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Fact>> {
        let query = format!("SELECT {COLUMNS} FROM facts WHERE streetcode_id = $1 ORDER BY id");
        sqlx::query_as::<_, Fact>(&query)
            .bind(streetcode_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, input: &NewFact) -> RepoResult<Fact> {
        let query = format!(
            "INSERT INTO facts (streetcode_id, title, fact_content, image_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fact>(&query)
            .bind(input.streetcode_id)
            .bind(&input.title)
            .bind(&input.fact_content)
            .bind(input.image_id)
            .fetch_one(&self.pool)
            .await
    }
}
