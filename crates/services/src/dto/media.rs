use serde::{Deserialize, Serialize};
use streetcode_core::types::{DbId, Timestamp};
use streetcode_db::models::audio::Audio;
use streetcode_db::models::image::{Image, ImageDetails, NewImageDetails};

/// An image row with its payload loaded from blob storage when available.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub id: DbId,
    pub blob_name: Option<String>,
    pub mime_type: Option<String>,
    pub base64: Option<String>,
}

impl From<Image> for ImageDto {
    fn from(row: Image) -> Self {
        Self {
            id: row.id,
            blob_name: row.blob_name,
            mime_type: row.mime_type,
            base64: None,
        }
    }
}

/// Title and `alt` for an image within a streetcode. `alt` carries the
/// image role marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetailsDto {
    #[serde(default)]
    pub id: DbId,
    pub image_id: DbId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl From<ImageDetails> for ImageDetailsDto {
    fn from(row: ImageDetails) -> Self {
        Self {
            id: row.id,
            image_id: row.image_id,
            title: row.title,
            alt: row.alt,
        }
    }
}

impl From<&ImageDetailsDto> for NewImageDetails {
    fn from(dto: &ImageDetailsDto) -> Self {
        Self {
            image_id: dto.image_id,
            title: dto.title.clone(),
            alt: dto.alt.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioDto {
    pub id: DbId,
    pub title: Option<String>,
    pub blob_name: String,
    pub mime_type: String,
    pub base64: Option<String>,
    pub created_at: Timestamp,
}

impl From<Audio> for AudioDto {
    fn from(row: Audio) -> Self {
        Self {
            id: row.id,
            title: row.title,
            blob_name: row.blob_name,
            mime_type: row.mime_type,
            base64: None,
            created_at: row.created_at,
        }
    }
}

/// Upload body for a new audio file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFileCreateDto {
    #[serde(default)]
    pub title: Option<String>,
    /// File contents as standard base64.
    pub base_format: String,
    pub mime_type: String,
    pub extension: String,
}

/// Raw blob bytes with the MIME type they should be served as.
#[derive(Debug, Clone)]
pub struct BlobPayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}
