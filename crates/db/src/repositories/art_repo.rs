//! Repository for the `arts` and `streetcode_arts` tables.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::art::{Art, StreetcodeArt};

/// Column list for `arts` queries.
const COLUMNS: &str = "id, image_id, title, description";

#[async_trait]
pub trait ArtRepository: Send + Sync {
    async fn list_all(&self) -> RepoResult<Vec<Art>>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Art>>;

    /// Arts linked to a streetcode, in gallery order.
    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Art>>;

    /// Every streetcode-art link.
    async fn list_links(&self) -> RepoResult<Vec<StreetcodeArt>>;
}

/// PostgreSQL implementation of [`ArtRepository`].
#[derive(Clone)]
pub struct PgArtRepo {
    pool: PgPool,
}

impl PgArtRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtRepository for PgArtRepo {
    async fn list_all(&self) -> RepoResult<Vec<Art>> {
        let query = format!("SELECT {COLUMNS} FROM arts ORDER BY id");
        sqlx::query_as::<_, Art>(&query).fetch_all(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Art>> {
        let query = format!("SELECT {COLUMNS} FROM arts WHERE id = $1");
        sqlx::query_as::<_, Art>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Art>> {
        sqlx::query_as::<_, Art>(
            "SELECT a.id, a.image_id, a.title, a.description \
             FROM arts a \
             JOIN streetcode_arts sa ON sa.art_id = a.id \
             WHERE sa.streetcode_id = $1 \
             ORDER BY sa.index, a.id",
        )
        .bind(streetcode_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn list_links(&self) -> RepoResult<Vec<StreetcodeArt>> {
        sqlx::query_as::<_, StreetcodeArt>(
            "SELECT id, streetcode_id, art_id, index FROM streetcode_arts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }
}
