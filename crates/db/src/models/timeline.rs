//! Timeline items and the historical contexts attached to them.

use sqlx::FromRow;
use streetcode_core::types::{DbId, Timestamp};

/// A row from the `timeline_items` table.
#[derive(Debug, Clone, FromRow)]
pub struct TimelineItem {
    pub id: DbId,
    pub streetcode_id: DbId,
    pub date: Timestamp,
    pub date_view_pattern: i16,
    pub title: String,
    pub description: Option<String>,
}

/// A historical context joined to the timeline item it belongs to.
#[derive(Debug, Clone, FromRow)]
pub struct TimelineContext {
    pub timeline_id: DbId,
    pub id: DbId,
    pub title: String,
}
