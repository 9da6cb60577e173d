//! In-memory streetcode, tag and image repositories.

use async_trait::async_trait;
use chrono::Utc;
use streetcode_core::search::contains_exact;
use streetcode_core::streetcode::StreetcodeStatus;
use streetcode_core::types::DbId;

use super::{MemoryRepositories, MemoryTables, TagIndexRow};
use crate::models::image::{Image, ImageDetails, NewImage};
use crate::models::streetcode::{Streetcode, StreetcodeInput};
use crate::models::tag::{StreetcodeTag, Tag};
use crate::repositories::{ImageRepository, RepoResult, StreetcodeRepository, TagRepository};

// ---------------------------------------------------------------------------
// Streetcodes
// ---------------------------------------------------------------------------

#[async_trait]
impl StreetcodeRepository for MemoryRepositories {
    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Streetcode>> {
        let tables = self.tables.read().await;
        Ok(tables.streetcodes.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_index(&self, index: i32) -> RepoResult<Option<Streetcode>> {
        let tables = self.tables.read().await;
        Ok(tables.streetcodes.iter().find(|s| s.index == index).cloned())
    }

    async fn list_published(&self) -> RepoResult<Vec<Streetcode>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Streetcode> = tables
            .streetcodes
            .iter()
            .filter(|s| s.status_id == StreetcodeStatus::Published.id())
            .cloned()
            .collect();
        rows.sort_by_key(|s| s.index);
        Ok(rows)
    }

    async fn search_published(&self, query: &str) -> RepoResult<Vec<Streetcode>> {
        let rows = StreetcodeRepository::list_published(self).await?;
        Ok(rows
            .into_iter()
            .filter(|s| {
                contains_exact(&s.title, query)
                    || s.alias.as_deref().is_some_and(|a| contains_exact(a, query))
                    || s.teaser.as_deref().is_some_and(|t| contains_exact(t, query))
            })
            .collect())
    }

    async fn create(&self, input: &StreetcodeInput) -> RepoResult<Streetcode> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let streetcode = Streetcode {
            id: tables.next_id(),
            index: input.index,
            type_id: input.streetcode_type.id(),
            title: input.title.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            alias: input.alias.clone(),
            transliteration_url: input.transliteration_url.clone(),
            teaser: input.teaser.clone(),
            date_string: input.date_string.clone(),
            event_start_or_person_birth_date: input.event_start_or_person_birth_date,
            event_end_or_person_death_date: input.event_end_or_person_death_date,
            status_id: input.status.id(),
            view_count: input.view_count,
            audio_id: input.audio_id,
            created_at: now,
            updated_at: now,
        };
        tables.streetcodes.push(streetcode.clone());
        write_links(&mut tables, streetcode.id, input);
        Ok(streetcode)
    }

    async fn update(&self, id: DbId, input: &StreetcodeInput) -> RepoResult<Option<Streetcode>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.streetcodes.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        row.index = input.index;
        row.type_id = input.streetcode_type.id();
        row.title = input.title.clone();
        row.first_name = input.first_name.clone();
        row.last_name = input.last_name.clone();
        row.alias = input.alias.clone();
        row.transliteration_url = input.transliteration_url.clone();
        row.teaser = input.teaser.clone();
        row.date_string = input.date_string.clone();
        row.event_start_or_person_birth_date = input.event_start_or_person_birth_date;
        row.event_end_or_person_death_date = input.event_end_or_person_death_date;
        row.status_id = input.status.id();
        row.audio_id = input.audio_id;
        row.updated_at = Utc::now();
        let updated = row.clone();

        let image_ids = input.image_ids();
        tables.streetcode_tags.retain(|l| l.streetcode_id != id);
        tables.streetcode_images.retain(|(s, _)| *s != id);
        tables
            .image_details
            .retain(|d| !image_ids.contains(&d.image_id));
        write_links(&mut tables, id, input);

        Ok(Some(updated))
    }

    async fn delete(&self, id: DbId) -> RepoResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.streetcodes.len();
        tables.streetcodes.retain(|s| s.id != id);
        let removed = (before - tables.streetcodes.len()) as u64;
        if removed > 0 {
            tables.streetcode_tags.retain(|l| l.streetcode_id != id);
            tables.streetcode_images.retain(|(s, _)| *s != id);
            tables.facts.retain(|f| f.streetcode_id != id);
            tables.texts.retain(|t| t.streetcode_id != id);
            tables.timeline_items.retain(|t| t.streetcode_id != id);
            tables.streetcode_arts.retain(|a| a.streetcode_id != id);
            tables.category_contents.retain(|c| c.streetcode_id != id);
            tables.streetcode_toponyms.retain(|(s, _)| *s != id);
        }
        Ok(removed)
    }
}

fn write_links(tables: &mut MemoryTables, streetcode_id: DbId, input: &StreetcodeInput) {
    for link in &input.tags {
        let tag_id = match link.tag_id {
            Some(id) => id,
            None => match tables.tags.iter().find(|t| t.title == link.title) {
                Some(existing) => existing.id,
                None => {
                    let id = tables.next_id();
                    tables.tags.push(Tag {
                        id,
                        title: link.title.clone(),
                    });
                    id
                }
            },
        };
        tables
            .streetcode_tags
            .retain(|l| !(l.streetcode_id == streetcode_id && l.tag_id == tag_id));
        tables.streetcode_tags.push(TagIndexRow {
            streetcode_id,
            tag_id,
            is_visible: link.is_visible,
            index: link.index,
        });
    }

    for detail in &input.image_details {
        let id = tables.next_id();
        tables.image_details.push(ImageDetails {
            id,
            image_id: detail.image_id,
            title: detail.title.clone(),
            alt: detail.alt.clone(),
        });
    }

    for image_id in input.image_ids() {
        if !tables.streetcode_images.contains(&(streetcode_id, image_id)) {
            tables.streetcode_images.push((streetcode_id, image_id));
        }
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

#[async_trait]
impl TagRepository for MemoryRepositories {
    async fn list_all(&self) -> RepoResult<Vec<Tag>> {
        let tables = self.tables.read().await;
        let mut tags = tables.tags.clone();
        tags.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(tags)
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Tag>> {
        let tables = self.tables.read().await;
        Ok(tables.tags.iter().find(|t| t.id == id).cloned())
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<StreetcodeTag>> {
        let tables = self.tables.read().await;
        let mut tags: Vec<StreetcodeTag> = tables
            .streetcode_tags
            .iter()
            .filter(|l| l.streetcode_id == streetcode_id)
            .filter_map(|l| {
                tables.tags.iter().find(|t| t.id == l.tag_id).map(|t| StreetcodeTag {
                    id: t.id,
                    title: t.title.clone(),
                    is_visible: l.is_visible,
                    index: l.index,
                })
            })
            .collect();
        tags.sort_by_key(|t| (t.index, t.id));
        Ok(tags)
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[async_trait]
impl ImageRepository for MemoryRepositories {
    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Image>> {
        let tables = self.tables.read().await;
        Ok(tables.images.iter().find(|i| i.id == id).cloned())
    }

    async fn find_existing_ids(&self, ids: &[DbId]) -> RepoResult<Vec<DbId>> {
        let tables = self.tables.read().await;
        Ok(tables
            .images
            .iter()
            .filter(|i| ids.contains(&i.id))
            .map(|i| i.id)
            .collect())
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Image>> {
        let tables = self.tables.read().await;
        Ok(tables
            .images
            .iter()
            .filter(|i| tables.streetcode_images.contains(&(streetcode_id, i.id)))
            .cloned()
            .collect())
    }

    async fn list_details_by_streetcode(
        &self,
        streetcode_id: DbId,
    ) -> RepoResult<Vec<ImageDetails>> {
        let tables = self.tables.read().await;
        Ok(tables
            .image_details
            .iter()
            .filter(|d| tables.streetcode_images.contains(&(streetcode_id, d.image_id)))
            .cloned()
            .collect())
    }

    async fn create(&self, input: &NewImage) -> RepoResult<Image> {
        let mut tables = self.tables.write().await;
        let image = Image {
            id: tables.next_id(),
            blob_name: Some(input.blob_name.clone()),
            mime_type: Some(input.mime_type.clone()),
            created_at: Utc::now(),
        };
        tables.images.push(image.clone());
        Ok(image)
    }

    async fn delete(&self, id: DbId) -> RepoResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.images.len();
        tables.images.retain(|i| i.id != id);
        let removed = (before - tables.images.len()) as u64;
        if removed > 0 {
            tables.image_details.retain(|d| d.image_id != id);
            tables.streetcode_images.retain(|(_, i)| *i != id);
            for news in tables.news.iter_mut().filter(|n| n.image_id == Some(id)) {
                news.image_id = None;
            }
        }
        Ok(removed)
    }
}
