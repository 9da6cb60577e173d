//! Repository layer.
//!
//! Each aggregate has an async trait and a PostgreSQL implementation holding
//! a pool handle. [`RepositoryWrapper`] bundles one of each so handlers take
//! a single dependency; [`PgRepositories`] is the production bundle and
//! [`crate::memory::MemoryRepositories`] the test bundle.

pub mod art_repo;
pub mod audio_repo;
pub mod fact_repo;
pub mod image_repo;
pub mod news_repo;
pub mod source_repo;
pub mod streetcode_repo;
pub mod tag_repo;
pub mod term_repo;
pub mod text_repo;
pub mod timeline_repo;
pub mod toponym_repo;

pub use art_repo::{ArtRepository, PgArtRepo};
pub use audio_repo::{AudioRepository, PgAudioRepo};
pub use fact_repo::{FactRepository, PgFactRepo};
pub use image_repo::{ImageRepository, PgImageRepo};
pub use news_repo::{NewsRepository, PgNewsRepo};
pub use source_repo::{PgSourceRepo, SourceRepository};
pub use streetcode_repo::{PgStreetcodeRepo, StreetcodeRepository};
pub use tag_repo::{PgTagRepo, TagRepository};
pub use term_repo::{PgTermRepo, TermRepository};
pub use text_repo::{PgTextRepo, TextRepository};
pub use timeline_repo::{PgTimelineRepo, TimelineRepository};
pub use toponym_repo::{PgToponymRepo, ToponymRepository};

use crate::DbPool;

/// Result type shared by every repository method.
pub type RepoResult<T> = Result<T, sqlx::Error>;

/// Access to every repository through one handle.
pub trait RepositoryWrapper: Send + Sync {
    fn streetcodes(&self) -> &dyn StreetcodeRepository;
    fn tags(&self) -> &dyn TagRepository;
    fn images(&self) -> &dyn ImageRepository;
    fn facts(&self) -> &dyn FactRepository;
    fn texts(&self) -> &dyn TextRepository;
    fn timeline(&self) -> &dyn TimelineRepository;
    fn arts(&self) -> &dyn ArtRepository;
    fn audios(&self) -> &dyn AudioRepository;
    fn sources(&self) -> &dyn SourceRepository;
    fn toponyms(&self) -> &dyn ToponymRepository;
    fn terms(&self) -> &dyn TermRepository;
    fn news(&self) -> &dyn NewsRepository;

    /// The PostgreSQL pool behind this bundle, if any. Used by health checks.
    fn pool(&self) -> Option<&DbPool> {
        None
    }
}

/// PostgreSQL-backed [`RepositoryWrapper`].
#[derive(Clone)]
pub struct PgRepositories {
    pool: DbPool,
    streetcodes: PgStreetcodeRepo,
    tags: PgTagRepo,
    images: PgImageRepo,
    facts: PgFactRepo,
    texts: PgTextRepo,
    timeline: PgTimelineRepo,
    arts: PgArtRepo,
    audios: PgAudioRepo,
    sources: PgSourceRepo,
    toponyms: PgToponymRepo,
    terms: PgTermRepo,
    news: PgNewsRepo,
}

impl PgRepositories {
    pub fn new(pool: DbPool) -> Self {
        Self {
            streetcodes: PgStreetcodeRepo::new(pool.clone()),
            tags: PgTagRepo::new(pool.clone()),
            images: PgImageRepo::new(pool.clone()),
            facts: PgFactRepo::new(pool.clone()),
            texts: PgTextRepo::new(pool.clone()),
            timeline: PgTimelineRepo::new(pool.clone()),
            arts: PgArtRepo::new(pool.clone()),
            audios: PgAudioRepo::new(pool.clone()),
            sources: PgSourceRepo::new(pool.clone()),
            toponyms: PgToponymRepo::new(pool.clone()),
            terms: PgTermRepo::new(pool.clone()),
            news: PgNewsRepo::new(pool.clone()),
            pool,
        }
    }
}

impl RepositoryWrapper for PgRepositories {
    fn streetcodes(&self) -> &dyn StreetcodeRepository {
        &self.streetcodes
    }
    fn tags(&self) -> &dyn TagRepository {
        &self.tags
    }
    fn images(&self) -> &dyn ImageRepository {
        &self.images
    }
    fn facts(&self) -> &dyn FactRepository {
        &self.facts
    }
    fn texts(&self) -> &dyn TextRepository {
        &self.texts
    }
    fn timeline(&self) -> &dyn TimelineRepository {
        &self.timeline
    }
    fn arts(&self) -> &dyn ArtRepository {
        &self.arts
    }
    fn audios(&self) -> &dyn AudioRepository {
        &self.audios
    }
    fn sources(&self) -> &dyn SourceRepository {
        &self.sources
    }
    fn toponyms(&self) -> &dyn ToponymRepository {
        &self.toponyms
    }
    fn terms(&self) -> &dyn TermRepository {
        &self.terms
    }
    fn news(&self) -> &dyn NewsRepository {
        &self.news
    }
    fn pool(&self) -> Option<&DbPool> {
        Some(&self.pool)
    }
}
