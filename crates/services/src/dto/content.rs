use serde::{Deserialize, Serialize};
use streetcode_core::types::{DbId, Timestamp};
use streetcode_db::models::art::Art;
use streetcode_db::models::fact::Fact;
use streetcode_db::models::text::Text;
use streetcode_db::models::timeline::{TimelineContext, TimelineItem};

use super::media::ImageDto;

// ---------------------------------------------------------------------------
// Facts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactDto {
    pub id: DbId,
    pub streetcode_id: DbId,
    pub title: String,
    pub fact_content: String,
    pub image_id: Option<DbId>,
}

impl From<Fact> for FactDto {
    fn from(row: Fact) -> Self {
        Self {
            id: row.id,
            streetcode_id: row.streetcode_id,
            title: row.title,
            fact_content: row.fact_content,
            image_id: row.image_id,
        }
    }
}

/// Body for a new fact. The streetcode comes from the route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCreateDto {
    pub title: String,
    pub fact_content: String,
    /// Zero or absent means the fact has no image.
    #[serde(default)]
    pub image_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Texts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDto {
    pub id: DbId,
    pub streetcode_id: DbId,
    pub title: String,
    pub text_content: Option<String>,
    pub additional_text: Option<String>,
}

impl From<Text> for TextDto {
    fn from(row: Text) -> Self {
        Self {
            id: row.id,
            streetcode_id: row.streetcode_id,
            title: row.title,
            text_content: row.text_content,
            additional_text: row.additional_text,
        }
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalContextDto {
    pub id: DbId,
    pub title: String,
}

impl From<TimelineContext> for HistoricalContextDto {
    fn from(row: TimelineContext) -> Self {
        Self {
            id: row.id,
            title: row.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItemDto {
    pub id: DbId,
    pub streetcode_id: DbId,
    pub date: Timestamp,
    pub date_view_pattern: i16,
    pub title: String,
    pub description: Option<String>,
    pub historical_contexts: Vec<HistoricalContextDto>,
}

impl TimelineItemDto {
    /// Map an item and attach the contexts that belong to it.
    pub fn with_contexts(row: TimelineItem, contexts: &[TimelineContext]) -> Self {
        let historical_contexts = contexts
            .iter()
            .filter(|c| c.timeline_id == row.id)
            .cloned()
            .map(HistoricalContextDto::from)
            .collect();
        Self {
            id: row.id,
            streetcode_id: row.streetcode_id,
            date: row.date,
            date_view_pattern: row.date_view_pattern,
            title: row.title,
            description: row.description,
            historical_contexts,
        }
    }
}

// ---------------------------------------------------------------------------
// Arts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtDto {
    pub id: DbId,
    pub image_id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageDto>,
}

impl From<Art> for ArtDto {
    fn from(row: Art) -> Self {
        Self {
            id: row.id,
            image_id: row.image_id,
            title: row.title,
            description: row.description,
            image: None,
        }
    }
}
