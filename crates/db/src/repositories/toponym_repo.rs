//! Repository for the `toponyms` table.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::toponym::Toponym;

/// Column list for `toponyms` queries.
const COLUMNS: &str = "\
    id, oblast, adminregion_old, adminregion_new, gromada, community, \
    street_name, street_type";

#[async_trait]
pub trait ToponymRepository: Send + Sync {
    /// All toponyms, optionally narrowed to street names containing `title`
    /// (case-insensitive).
    async fn list_all(&self, title: Option<&str>) -> RepoResult<Vec<Toponym>>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Toponym>>;

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Toponym>>;
}

/// PostgreSQL implementation of [`ToponymRepository`].
#[derive(Clone)]
pub struct PgToponymRepo {
    pool: PgPool,
}

impl PgToponymRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToponymRepository for PgToponymRepo {
    async fn list_all(&self, title: Option<&str>) -> RepoResult<Vec<Toponym>> {
        match title.filter(|t| !t.is_empty()) {
            Some(title) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM toponyms \
                     WHERE strpos(lower(street_name), lower($1)) > 0 \
                     ORDER BY street_name, id"
                );
                sqlx::query_as::<_, Toponym>(&query)
                    .bind(title)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM toponyms ORDER BY street_name, id");
                sqlx::query_as::<_, Toponym>(&query)
                    .fetch_all(&self.pool)
                    .await
            }
        }
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Toponym>> {
        let query = format!("SELECT {COLUMNS} FROM toponyms WHERE id = $1");
        sqlx::query_as::<_, Toponym>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Toponym>> {
        sqlx::query_as::<_, Toponym>(
            "SELECT t.id, t.oblast, t.adminregion_old, t.adminregion_new, t.gromada, \
                    t.community, t.street_name, t.street_type \
             FROM toponyms t \
             JOIN streetcode_toponyms st ON st.toponym_id = t.id \
             WHERE st.streetcode_id = $1 \
             ORDER BY t.street_name, t.id",
        )
        .bind(streetcode_id)
        .fetch_all(&self.pool)
        .await
    }
}
