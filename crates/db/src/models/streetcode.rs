//! Streetcode rows and the write input shared by create and update.

use sqlx::FromRow;
use streetcode_core::streetcode::{LookupId, StreetcodeStatus, StreetcodeType};
use streetcode_core::types::{DbId, Timestamp};

use super::image::NewImageDetails;
use super::tag::TagLink;

/// A row from the `streetcodes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Streetcode {
    pub id: DbId,
    pub index: i32,
    pub type_id: LookupId,
    pub title: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub alias: Option<String>,
    pub transliteration_url: String,
    pub teaser: Option<String>,
    pub date_string: String,
    pub event_start_or_person_birth_date: Timestamp,
    pub event_end_or_person_death_date: Option<Timestamp>,
    pub status_id: LookupId,
    pub view_count: i32,
    pub audio_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Streetcode {
    pub fn streetcode_type(&self) -> StreetcodeType {
        StreetcodeType::from_id_or_person(self.type_id)
    }

    pub fn is_published(&self) -> bool {
        self.status_id == StreetcodeStatus::Published.id()
    }
}

/// Everything written when a streetcode is created or updated.
///
/// Tag links and image details are replaced wholesale inside the same
/// transaction as the streetcode row.
#[derive(Debug, Clone)]
pub struct StreetcodeInput {
    pub index: i32,
    pub streetcode_type: StreetcodeType,
    pub title: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub alias: Option<String>,
    pub transliteration_url: String,
    pub teaser: Option<String>,
    pub date_string: String,
    pub event_start_or_person_birth_date: Timestamp,
    pub event_end_or_person_death_date: Option<Timestamp>,
    pub status: StreetcodeStatus,
    pub view_count: i32,
    pub audio_id: Option<DbId>,
    pub tags: Vec<TagLink>,
    pub image_details: Vec<NewImageDetails>,
}

impl StreetcodeInput {
    /// Distinct image ids referenced by the image details, in first-seen order.
    pub fn image_ids(&self) -> Vec<DbId> {
        let mut ids: Vec<DbId> = Vec::with_capacity(self.image_details.len());
        for detail in &self.image_details {
            if !ids.contains(&detail.image_id) {
                ids.push(detail.image_id);
            }
        }
        ids
    }
}
