//! Fixtures shared by the unit tests in this crate.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use streetcode_core::streetcode::{StreetcodeStatus, StreetcodeType};
use streetcode_core::types::DbId;
use streetcode_db::memory::MemoryRepositories;
use streetcode_db::models::image::NewImage;
use streetcode_db::models::streetcode::{Streetcode, StreetcodeInput};
use streetcode_db::repositories::{ImageRepository, StreetcodeRepository};

use crate::blob::MemoryBlobStorage;
use crate::context::AppContext;
use crate::dto::media::ImageDetailsDto;
use crate::dto::streetcode::{StreetcodeCreateDto, StreetcodeCreateUpdateDto};

pub fn memory_context() -> (AppContext, MemoryRepositories, Arc<MemoryBlobStorage>) {
    let repos = MemoryRepositories::new();
    let blobs = Arc::new(MemoryBlobStorage::new());
    let ctx = AppContext::new(Arc::new(repos.clone()), blobs.clone());
    (ctx, repos, blobs)
}

pub async fn seed_image(repos: &MemoryRepositories) -> DbId {
    ImageRepository::create(
        repos,
        &NewImage {
            blob_name: "portrait.png".into(),
            mime_type: "image/png".into(),
        },
    )
    .await
    .unwrap()
    .id
}

/// Insert a person streetcode with a derived URL and teaser.
pub async fn seed_streetcode(
    repos: &MemoryRepositories,
    index: i32,
    title: &str,
    published: bool,
) -> Streetcode {
    let input = StreetcodeInput {
        index,
        streetcode_type: StreetcodeType::Person,
        title: title.to_string(),
        first_name: None,
        last_name: None,
        alias: None,
        transliteration_url: slug(title),
        teaser: Some(format!("Teaser about {title}")),
        date_string: "1856".into(),
        event_start_or_person_birth_date: Utc.with_ymd_and_hms(1856, 8, 27, 0, 0, 0).unwrap(),
        event_end_or_person_death_date: None,
        status: if published {
            StreetcodeStatus::Published
        } else {
            StreetcodeStatus::Draft
        },
        view_count: 0,
        audio_id: None,
        tags: Vec::new(),
        image_details: Vec::new(),
    };
    StreetcodeRepository::create(repos, &input).await.unwrap()
}

/// A valid create body with one black-and-white image detail.
pub fn streetcode_body(index: i32, title: &str, image_id: DbId) -> StreetcodeCreateDto {
    StreetcodeCreateDto {
        base: StreetcodeCreateUpdateDto {
            index,
            streetcode_type: StreetcodeType::Person,
            first_name: Some("Ivan".into()),
            last_name: Some("Franko".into()),
            title: title.to_string(),
            alias: None,
            transliteration_url: slug(title),
            event_start_or_person_birth_date: Utc.with_ymd_and_hms(1856, 8, 27, 0, 0, 0).unwrap(),
            event_end_or_person_death_date: None,
            date_string: "1856 - 1916".into(),
            teaser: Some("Poet, writer and public figure.".into()),
            status: StreetcodeStatus::Published,
            audio_id: None,
            tags: Vec::new(),
            images_details: vec![ImageDetailsDto {
                id: 0,
                image_id,
                title: Some("Portrait".into()),
                alt: Some("1".into()),
            }],
        },
        view_count: 0,
    }
}

fn slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}
