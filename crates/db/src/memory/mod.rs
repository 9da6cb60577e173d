//! In-memory [`RepositoryWrapper`] used by service and API tests.
//!
//! All tables live behind one `tokio::sync::RwLock`. Ids come from a single
//! counter shared by every table. Unique constraints are not enforced here;
//! the validators in the service layer are expected to catch duplicates
//! before a write.

mod content;
mod streetcode;

use std::sync::Arc;

use tokio::sync::RwLock;

use streetcode_core::types::DbId;

use crate::models::art::{Art, StreetcodeArt};
use crate::models::audio::Audio;
use crate::models::fact::Fact;
use crate::models::image::{Image, ImageDetails};
use crate::models::news::News;
use crate::models::source::{SourceLinkCategory, StreetcodeCategoryContent};
use crate::models::streetcode::Streetcode;
use crate::models::tag::Tag;
use crate::models::term::{RelatedTerm, Term};
use crate::models::text::Text;
use crate::models::timeline::{TimelineContext, TimelineItem};
use crate::models::toponym::Toponym;
use crate::repositories::{
    ArtRepository, AudioRepository, FactRepository, ImageRepository, NewsRepository,
    RepositoryWrapper, SourceRepository, StreetcodeRepository, TagRepository, TermRepository,
    TextRepository, TimelineRepository, ToponymRepository,
};

/// A `streetcode_tag_index` row.
#[derive(Debug, Clone)]
pub struct TagIndexRow {
    pub streetcode_id: DbId,
    pub tag_id: DbId,
    pub is_visible: bool,
    pub index: i32,
}

/// Every table the in-memory store holds.
#[derive(Debug, Default)]
pub struct MemoryTables {
    next_id: DbId,
    pub streetcodes: Vec<Streetcode>,
    pub tags: Vec<Tag>,
    pub streetcode_tags: Vec<TagIndexRow>,
    pub images: Vec<Image>,
    pub image_details: Vec<ImageDetails>,
    /// `(streetcode_id, image_id)`
    pub streetcode_images: Vec<(DbId, DbId)>,
    pub facts: Vec<Fact>,
    pub texts: Vec<Text>,
    pub timeline_items: Vec<TimelineItem>,
    pub timeline_contexts: Vec<TimelineContext>,
    pub arts: Vec<Art>,
    pub streetcode_arts: Vec<StreetcodeArt>,
    pub audios: Vec<Audio>,
    pub categories: Vec<SourceLinkCategory>,
    pub category_contents: Vec<StreetcodeCategoryContent>,
    pub toponyms: Vec<Toponym>,
    /// `(streetcode_id, toponym_id)`
    pub streetcode_toponyms: Vec<(DbId, DbId)>,
    pub terms: Vec<Term>,
    pub related_terms: Vec<RelatedTerm>,
    pub news: Vec<News>,
}

impl MemoryTables {
    /// Allocate the next id. Ids start at 1 and are never reused.
    pub fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// Cheaply cloneable in-memory repository bundle.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepositories {
    tables: Arc<RwLock<MemoryTables>>,
}

impl MemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutate the tables directly, e.g. to seed rows that have no write
    /// operation in the repository traits.
    pub async fn seed<T>(&self, f: impl FnOnce(&mut MemoryTables) -> T) -> T {
        let mut tables = self.tables.write().await;
        f(&mut tables)
    }

    /// Read the tables directly, for assertions in tests.
    pub async fn inspect<T>(&self, f: impl FnOnce(&MemoryTables) -> T) -> T {
        let tables = self.tables.read().await;
        f(&tables)
    }
}

impl RepositoryWrapper for MemoryRepositories {
    fn streetcodes(&self) -> &dyn StreetcodeRepository {
        self
    }
    fn tags(&self) -> &dyn TagRepository {
        self
    }
    fn images(&self) -> &dyn ImageRepository {
        self
    }
    fn facts(&self) -> &dyn FactRepository {
        self
    }
    fn texts(&self) -> &dyn TextRepository {
        self
    }
    fn timeline(&self) -> &dyn TimelineRepository {
        self
    }
    fn arts(&self) -> &dyn ArtRepository {
        self
    }
    fn audios(&self) -> &dyn AudioRepository {
        self
    }
    fn sources(&self) -> &dyn SourceRepository {
        self
    }
    fn toponyms(&self) -> &dyn ToponymRepository {
        self
    }
    fn terms(&self) -> &dyn TermRepository {
        self
    }
    fn news(&self) -> &dyn NewsRepository {
        self
    }
}
