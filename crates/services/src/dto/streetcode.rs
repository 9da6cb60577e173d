use serde::{Deserialize, Serialize};
use streetcode_core::streetcode::{StreetcodeStatus, StreetcodeType};
use streetcode_core::types::{DbId, Timestamp};
use streetcode_core::validation::streetcode::StreetcodeFields;
use streetcode_db::models::image::NewImageDetails;
use streetcode_db::models::streetcode::{Streetcode, StreetcodeInput};
use streetcode_db::models::tag::TagLink;

use super::media::ImageDetailsDto;
use super::tag::StreetcodeTagDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetcodeDto {
    pub id: DbId,
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Streetcode> for StreetcodeDto {
    fn from(row: Streetcode) -> Self {
        Self {
            id: row.id,
            index: row.index,
            streetcode_type: row.streetcode_type(),
            status: StreetcodeStatus::from_id(row.status_id).unwrap_or(StreetcodeStatus::Draft),
            title: row.title,
            first_name: row.first_name,
            last_name: row.last_name,
            alias: row.alias,
            transliteration_url: row.transliteration_url,
            teaser: row.teaser,
            date_string: row.date_string,
            event_start_or_person_birth_date: row.event_start_or_person_birth_date,
            event_end_or_person_death_date: row.event_end_or_person_death_date,
            view_count: row.view_count,
            audio_id: row.audio_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn default_status() -> StreetcodeStatus {
    StreetcodeStatus::Draft
}

/// Fields shared by the create and update bodies.
///
/// Required text fields default to empty so a missing field surfaces as a
/// validation message rather than a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetcodeCreateUpdateDto {
    pub index: i32,
    pub streetcode_type: StreetcodeType,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub transliteration_url: String,
    pub event_start_or_person_birth_date: Timestamp,
    #[serde(default)]
    pub event_end_or_person_death_date: Option<Timestamp>,
    #[serde(default)]
    pub date_string: String,
    #[serde(default)]
    pub teaser: Option<String>,
    #[serde(default = "default_status")]
    pub status: StreetcodeStatus,
    #[serde(default)]
    pub audio_id: Option<DbId>,
    #[serde(default)]
    pub tags: Vec<StreetcodeTagDto>,
    #[serde(default)]
    pub images_details: Vec<ImageDetailsDto>,
}

impl StreetcodeCreateUpdateDto {
    /// Borrowed view for the field rules.
    pub fn fields(&self) -> StreetcodeFields<'_> {
        StreetcodeFields {
            index: self.index,
            streetcode_type: self.streetcode_type,
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
            title: &self.title,
            alias: self.alias.as_deref(),
            transliteration_url: &self.transliteration_url,
            date_string: &self.date_string,
            teaser: self.teaser.as_deref(),
            image_alts: self.images_details.iter().map(|d| d.alt.as_deref()).collect(),
        }
    }

    /// Distinct image ids referenced by the image details.
    pub fn image_ids(&self) -> Vec<DbId> {
        let mut ids = Vec::new();
        for detail in &self.images_details {
            if !ids.contains(&detail.image_id) {
                ids.push(detail.image_id);
            }
        }
        ids
    }

    /// Build the repository write input. An audio id of zero means none.
    pub fn to_input(&self, view_count: i32) -> StreetcodeInput {
        StreetcodeInput {
            index: self.index,
            streetcode_type: self.streetcode_type,
            title: self.title.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            alias: self.alias.clone(),
            transliteration_url: self.transliteration_url.clone(),
            teaser: self.teaser.clone(),
            date_string: self.date_string.clone(),
            event_start_or_person_birth_date: self.event_start_or_person_birth_date,
            event_end_or_person_death_date: self.event_end_or_person_death_date,
            status: self.status,
            view_count,
            audio_id: self.audio_id.filter(|id| *id > 0),
            tags: self.tags.iter().map(TagLink::from).collect(),
            image_details: self.images_details.iter().map(NewImageDetails::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetcodeCreateDto {
    #[serde(flatten)]
    pub base: StreetcodeCreateUpdateDto,
    /// Accepted for compatibility; new streetcodes always start at zero.
    #[serde(default)]
    pub view_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetcodeUpdateDto {
    pub id: DbId,
    #[serde(flatten)]
    pub base: StreetcodeCreateUpdateDto,
}

/// One hit of the filter search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetcodeFilterResultDto {
    pub streetcode_id: DbId,
    pub streetcode_transliteration_url: String,
    pub streetcode_index: i32,
    pub source_name: Option<String>,
    pub block_name: Option<String>,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_body_flattens_shared_fields() {
        let json = serde_json::json!({
            "id": 4,
            "index": 12,
            "streetcodeType": "event",
            "title": "Battle",
            "transliterationUrl": "battle",
            "eventStartOrPersonBirthDate": "1918-01-29T00:00:00Z",
            "dateString": "29 січня 1918",
            "tags": [{ "id": 0, "title": "war" }],
            "imagesDetails": [{ "imageId": 9, "alt": "1" }]
        });
        let dto: StreetcodeUpdateDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.id, 4);
        assert_eq!(dto.base.streetcode_type, StreetcodeType::Event);
        assert_eq!(dto.base.status, StreetcodeStatus::Draft);

        let input = dto.base.to_input(0);
        assert_eq!(input.tags[0].tag_id, None);
        assert_eq!(input.image_details[0].image_id, 9);
        assert_eq!(dto.base.fields().image_alts, vec![Some("1")]);
    }

    #[test]
    fn missing_title_deserializes_as_empty() {
        let json = serde_json::json!({
            "index": 1,
            "streetcodeType": "person",
            "eventStartOrPersonBirthDate": "1856-08-27T00:00:00Z"
        });
        let dto: StreetcodeCreateDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.base.title, "");
        assert!(dto.base.images_details.is_empty());
    }
}
