//! Repository for `timeline_items` and their historical contexts.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::timeline::{TimelineContext, TimelineItem};

/// Column list for `timeline_items` queries.
const COLUMNS: &str = "id, streetcode_id, date, date_view_pattern, title, description";

#[async_trait]
pub trait TimelineRepository: Send + Sync {
    async fn list_all(&self) -> RepoResult<Vec<TimelineItem>>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<TimelineItem>>;

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<TimelineItem>>;

    /// Historical contexts attached to any of the given timeline items.
    async fn list_contexts(&self, timeline_ids: &[DbId]) -> RepoResult<Vec<TimelineContext>>;
}

/// PostgreSQL implementation of [`TimelineRepository`].
#[derive(Clone)]
pub struct PgTimelineRepo {
    pool: PgPool,
}

impl PgTimelineRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimelineRepository for PgTimelineRepo {
    async fn list_all(&self) -> RepoResult<Vec<TimelineItem>> {
        let query = format!("SELECT {COLUMNS} FROM timeline_items ORDER BY date, id");
        sqlx::query_as::<_, TimelineItem>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<TimelineItem>> {
        let query = format!("SELECT {COLUMNS} FROM timeline_items WHERE id = $1");
        sqlx::query_as::<_, TimelineItem>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<TimelineItem>> {
        let query = format!(
            "SELECT {COLUMNS} FROM timeline_items WHERE streetcode_id = $1 ORDER BY date, id"
        );
        sqlx::query_as::<_, TimelineItem>(&query)
            .bind(streetcode_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn list_contexts(&self, timeline_ids: &[DbId]) -> RepoResult<Vec<TimelineContext>> {
        sqlx::query_as::<_, TimelineContext>(
            "SELECT hct.timeline_id, hc.id, hc.title \
             FROM historical_contexts hc \
             JOIN historical_context_timelines hct ON hct.historical_context_id = hc.id \
             WHERE hct.timeline_id = ANY($1) \
             ORDER BY hc.title",
        )
        .bind(timeline_ids)
        .fetch_all(&self.pool)
        .await
    }
}
