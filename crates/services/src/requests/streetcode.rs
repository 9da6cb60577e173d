//! Streetcode commands and queries, including the filter search.

use std::collections::HashMap;

use async_trait::async_trait;
use streetcode_core::search::{
    art_matches, fact_matches, match_streetcode, match_text, timeline_matches, SearchBlock,
    StreetcodeSearchFields,
};
use streetcode_core::types::DbId;
use streetcode_db::models::streetcode::Streetcode;

use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::streetcode::{
    StreetcodeCreateDto, StreetcodeDto, StreetcodeFilterResultDto, StreetcodeUpdateDto,
};
use crate::error::{not_found, persistence, ServiceResult, WriteResultExt};

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub struct CreateStreetcode {
    pub streetcode: StreetcodeCreateDto,
}

#[async_trait]
impl Request for CreateStreetcode {
    type Response = StreetcodeDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<StreetcodeDto> {
        let input = self.streetcode.base.to_input(0);
        let created = ctx
            .repos
            .streetcodes()
            .create(&input)
            .await
            .or_persistence("Failed to save streetcode to database")?;

        tracing::info!(
            streetcode_id = created.id,
            index = created.index,
            tags = input.tags.len(),
            images = input.image_details.len(),
            "Streetcode created",
        );
        Ok(created.into())
    }
}

pub struct UpdateStreetcode {
    pub streetcode: StreetcodeUpdateDto,
}

#[async_trait]
impl Request for UpdateStreetcode {
    type Response = StreetcodeDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<StreetcodeDto> {
        let id = self.streetcode.id;
        let input = self.streetcode.base.to_input(0);

        let Some(updated) = ctx.repos.streetcodes().update(id, &input).await? else {
            return Err(not_found(format!(
                "Cannot find any Streetcode with corresponding Id: {id}"
            )));
        };

        tracing::info!(streetcode_id = id, "Streetcode updated");
        Ok(updated.into())
    }
}

pub struct DeleteStreetcode {
    pub id: DbId,
}

#[async_trait]
impl Request for DeleteStreetcode {
    type Response = ();

    async fn handle(self, ctx: &AppContext) -> ServiceResult<()> {
        let repo = ctx.repos.streetcodes();
        if repo.find_by_id(self.id).await?.is_none() {
            return Err(not_found(format!(
                "Cannot find any Streetcode with corresponding Id: {}",
                self.id
            )));
        }

        if repo.delete(self.id).await? == 0 {
            return Err(persistence("Failed to delete the Streetcode"));
        }

        tracing::info!(streetcode_id = self.id, "Streetcode deleted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Succeeds with `None` when the streetcode does not exist.
pub struct GetStreetcodeById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetStreetcodeById {
    type Response = Option<StreetcodeDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Option<StreetcodeDto>> {
        let found = ctx.repos.streetcodes().find_by_id(self.id).await?;
        Ok(found.map(StreetcodeDto::from))
    }
}

/// Full-text filter over published streetcodes and their content blocks.
///
/// Hits are ordered by block: streetcode fields, texts, facts, timeline
/// items, arts. Within a block they follow repository order. A streetcode
/// yields at most one streetcode-level hit but any number of content hits.
pub struct GetStreetcodeByFilter {
    pub search_query: String,
}

fn hit(streetcode: &Streetcode, block: SearchBlock, content: &str) -> StreetcodeFilterResultDto {
    StreetcodeFilterResultDto {
        streetcode_id: streetcode.id,
        streetcode_transliteration_url: streetcode.transliteration_url.clone(),
        streetcode_index: streetcode.index,
        source_name: block.source_name().map(str::to_string),
        block_name: block.block_name().map(str::to_string),
        content: content.to_string(),
    }
}

#[async_trait]
impl Request for GetStreetcodeByFilter {
    type Response = Vec<StreetcodeFilterResultDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<StreetcodeFilterResultDto>> {
        let query = self.search_query.as_str();
        let mut results = Vec::new();

        // Streetcode fields.
        let candidates = ctx.repos.streetcodes().search_published(query).await?;
        tracing::debug!(count = candidates.len(), "Searching streetcode fields");
        for streetcode in &candidates {
            let fields = StreetcodeSearchFields {
                title: &streetcode.title,
                alias: streetcode.alias.as_deref(),
                teaser: streetcode.teaser.as_deref(),
                transliteration_url: &streetcode.transliteration_url,
            };
            if let Some(content) = match_streetcode(query, &fields) {
                results.push(hit(streetcode, SearchBlock::Streetcode, content));
            }
        }

        let published: HashMap<DbId, Streetcode> = ctx
            .repos
            .streetcodes()
            .list_published()
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        // Texts.
        let texts = ctx.repos.texts().list_all().await?;
        tracing::debug!(count = texts.len(), "Searching texts");
        for text in &texts {
            let Some(streetcode) = published.get(&text.streetcode_id) else {
                continue;
            };
            if let Some(content) = match_text(query, &text.title, text.text_content.as_deref()) {
                results.push(hit(streetcode, SearchBlock::Text, content));
            }
        }

        // Facts.
        let facts = ctx.repos.facts().list_all().await?;
        tracing::debug!(count = facts.len(), "Searching facts");
        for fact in &facts {
            let Some(streetcode) = published.get(&fact.streetcode_id) else {
                continue;
            };
            if fact_matches(query, &fact.title, &fact.fact_content) {
                results.push(hit(streetcode, SearchBlock::Fact, &fact.title));
            }
        }

        // Timeline items.
        let items = ctx.repos.timeline().list_all().await?;
        tracing::debug!(count = items.len(), "Searching timeline items");
        for item in &items {
            let Some(streetcode) = published.get(&item.streetcode_id) else {
                continue;
            };
            if timeline_matches(query, &item.title, item.description.as_deref()) {
                results.push(hit(streetcode, SearchBlock::Timeline, &item.title));
            }
        }

        // Arts, one hit per published streetcode the art is linked to.
        let arts = ctx.repos.arts().list_all().await?;
        let links = ctx.repos.arts().list_links().await?;
        tracing::debug!(count = arts.len(), "Searching arts");
        for art in &arts {
            if !art_matches(query, art.description.as_deref()) {
                continue;
            }
            let description = art.description.as_deref().unwrap_or_default();
            for link in links.iter().filter(|l| l.art_id == art.id) {
                if let Some(streetcode) = published.get(&link.streetcode_id) {
                    results.push(hit(streetcode, SearchBlock::Art, description));
                }
            }
        }

        tracing::info!(query, hits = results.len(), "Streetcode filter search finished");
        Ok(results)
    }
}
