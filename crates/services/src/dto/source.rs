use serde::{Deserialize, Serialize};
use streetcode_core::types::DbId;
use streetcode_db::models::source::{SourceLinkCategory, StreetcodeCategoryContent};

use super::media::ImageDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLinkCategoryDto {
    pub id: DbId,
    pub title: String,
    pub image_id: Option<DbId>,
    pub image: Option<ImageDto>,
}

impl From<SourceLinkCategory> for SourceLinkCategoryDto {
    fn from(row: SourceLinkCategory) -> Self {
        Self {
            id: row.id,
            title: row.title,
            image_id: row.image_id,
            image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNameDto {
    pub id: DbId,
    pub title: String,
}

impl From<SourceLinkCategory> for CategoryNameDto {
    fn from(row: SourceLinkCategory) -> Self {
        Self {
            id: row.id,
            title: row.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryContentDto {
    pub source_link_category_id: DbId,
    pub streetcode_id: DbId,
    pub text: Option<String>,
}

impl From<StreetcodeCategoryContent> for CategoryContentDto {
    fn from(row: StreetcodeCategoryContent) -> Self {
        Self {
            source_link_category_id: row.source_link_category_id,
            streetcode_id: row.streetcode_id,
            text: row.text,
        }
    }
}
