use serde::{Deserialize, Serialize};
use streetcode_core::types::DbId;
use streetcode_db::models::tag::{StreetcodeTag, Tag, TagLink};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: DbId,
    pub title: String,
}

impl From<Tag> for TagDto {
    fn from(row: Tag) -> Self {
        Self {
            id: row.id,
            title: row.title,
        }
    }
}

/// A tag as linked to one streetcode.
///
/// On input, an `id` of zero or less asks for a new tag with `title` (or
/// reuse of an existing tag with the same title).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetcodeTagDto {
    #[serde(default)]
    pub id: DbId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_visible: bool,
    #[serde(default)]
    pub index: i32,
}

impl From<StreetcodeTag> for StreetcodeTagDto {
    fn from(row: StreetcodeTag) -> Self {
        Self {
            id: row.id,
            title: row.title,
            is_visible: row.is_visible,
            index: row.index,
        }
    }
}

impl From<&StreetcodeTagDto> for TagLink {
    fn from(dto: &StreetcodeTagDto) -> Self {
        Self {
            tag_id: (dto.id > 0).then_some(dto.id),
            title: dto.title.clone(),
            is_visible: dto.is_visible,
            index: dto.index,
        }
    }
}
