//! In-memory repositories for streetcode content, media, dictionary and news.

use async_trait::async_trait;
use chrono::Utc;
use streetcode_core::search::contains_ignore_case;
use streetcode_core::types::DbId;

use super::MemoryRepositories;
use crate::models::art::{Art, StreetcodeArt};
use crate::models::audio::{Audio, NewAudio};
use crate::models::fact::{Fact, NewFact};
use crate::models::news::{News, NewsInput};
use crate::models::source::{SourceLinkCategory, StreetcodeCategoryContent};
use crate::models::term::{RelatedTerm, Term};
use crate::models::text::Text;
use crate::models::timeline::{TimelineContext, TimelineItem};
use crate::models::toponym::Toponym;
use crate::repositories::{
    ArtRepository, AudioRepository, FactRepository, NewsRepository, RepoResult,
    SourceRepository, TermRepository, TextRepository, TimelineRepository, ToponymRepository,
};

#[async_trait]
impl FactRepository for MemoryRepositories {
    async fn list_all(&self) -> RepoResult<Vec<Fact>> {
        Ok(self.tables.read().await.facts.clone())
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Fact>> {
        let tables = self.tables.read().await;
        Ok(tables.facts.iter().find(|f| f.id == id).cloned())
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Fact>> {
        let tables = self.tables.read().await;
        Ok(tables
            .facts
            .iter()
            .filter(|f| f.streetcode_id == streetcode_id)
            .cloned()
            .collect())
    }

    async fn create(&self, input: &NewFact) -> RepoResult<Fact> {
        let mut tables = self.tables.write().await;
        let fact = Fact {
            id: tables.next_id(),
            streetcode_id: input.streetcode_id,
            title: input.title.clone(),
            fact_content: input.fact_content.clone(),
            image_id: input.image_id,
        };
        tables.facts.push(fact.clone());
        Ok(fact)
    }
}

#[async_trait]
impl TextRepository for MemoryRepositories {
    async fn list_all(&self) -> RepoResult<Vec<Text>> {
        Ok(self.tables.read().await.texts.clone())
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Text>> {
        let tables = self.tables.read().await;
        Ok(tables.texts.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Option<Text>> {
        let tables = self.tables.read().await;
        Ok(tables
            .texts
            .iter()
            .find(|t| t.streetcode_id == streetcode_id)
            .cloned())
    }
}

#[async_trait]
impl TimelineRepository for MemoryRepositories {
    async fn list_all(&self) -> RepoResult<Vec<TimelineItem>> {
        let mut items = self.tables.read().await.timeline_items.clone();
        items.sort_by_key(|t| (t.date, t.id));
        Ok(items)
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<TimelineItem>> {
        let tables = self.tables.read().await;
        Ok(tables.timeline_items.iter().find(|t| t.id == id).cloned())
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<TimelineItem>> {
        let items = TimelineRepository::list_all(self).await?;
        Ok(items
            .into_iter()
            .filter(|t| t.streetcode_id == streetcode_id)
            .collect())
    }

    async fn list_contexts(&self, timeline_ids: &[DbId]) -> RepoResult<Vec<TimelineContext>> {
        let tables = self.tables.read().await;
        let mut contexts: Vec<TimelineContext> = tables
            .timeline_contexts
            .iter()
            .filter(|c| timeline_ids.contains(&c.timeline_id))
            .cloned()
            .collect();
        contexts.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(contexts)
    }
}

#[async_trait]
impl ArtRepository for MemoryRepositories {
    async fn list_all(&self) -> RepoResult<Vec<Art>> {
        Ok(self.tables.read().await.arts.clone())
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Art>> {
        let tables = self.tables.read().await;
        Ok(tables.arts.iter().find(|a| a.id == id).cloned())
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Art>> {
        let tables = self.tables.read().await;
        let mut links: Vec<&StreetcodeArt> = tables
            .streetcode_arts
            .iter()
            .filter(|l| l.streetcode_id == streetcode_id)
            .collect();
        links.sort_by_key(|l| (l.index, l.art_id));
        Ok(links
            .into_iter()
            .filter_map(|l| tables.arts.iter().find(|a| a.id == l.art_id).cloned())
            .collect())
    }

    async fn list_links(&self) -> RepoResult<Vec<StreetcodeArt>> {
        Ok(self.tables.read().await.streetcode_arts.clone())
    }
}

#[async_trait]
impl AudioRepository for MemoryRepositories {
    async fn list_all(&self) -> RepoResult<Vec<Audio>> {
        Ok(self.tables.read().await.audios.clone())
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Audio>> {
        let tables = self.tables.read().await;
        Ok(tables.audios.iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, input: &NewAudio) -> RepoResult<Audio> {
        let mut tables = self.tables.write().await;
        let audio = Audio {
            id: tables.next_id(),
            title: input.title.clone(),
            blob_name: input.blob_name.clone(),
            mime_type: input.mime_type.clone(),
            created_at: Utc::now(),
        };
        tables.audios.push(audio.clone());
        Ok(audio)
    }

    async fn delete(&self, id: DbId) -> RepoResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.audios.len();
        tables.audios.retain(|a| a.id != id);
        let removed = (before - tables.audios.len()) as u64;
        for streetcode in tables.streetcodes.iter_mut().filter(|s| s.audio_id == Some(id)) {
            streetcode.audio_id = None;
        }
        Ok(removed)
    }
}

#[async_trait]
impl SourceRepository for MemoryRepositories {
    async fn list_categories(&self) -> RepoResult<Vec<SourceLinkCategory>> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn find_category(&self, id: DbId) -> RepoResult<Option<SourceLinkCategory>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_categories_by_streetcode(
        &self,
        streetcode_id: DbId,
    ) -> RepoResult<Vec<SourceLinkCategory>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .filter(|c| {
                tables.category_contents.iter().any(|cc| {
                    cc.streetcode_id == streetcode_id && cc.source_link_category_id == c.id
                })
            })
            .cloned()
            .collect())
    }

    async fn find_content(
        &self,
        streetcode_id: DbId,
        category_id: DbId,
    ) -> RepoResult<Option<StreetcodeCategoryContent>> {
        let tables = self.tables.read().await;
        Ok(tables
            .category_contents
            .iter()
            .find(|cc| cc.streetcode_id == streetcode_id && cc.source_link_category_id == category_id)
            .cloned())
    }
}

#[async_trait]
impl ToponymRepository for MemoryRepositories {
    async fn list_all(&self, title: Option<&str>) -> RepoResult<Vec<Toponym>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Toponym> = tables
            .toponyms
            .iter()
            .filter(|t| title.is_none_or(|q| contains_ignore_case(&t.street_name, q)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.street_name.cmp(&b.street_name).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Toponym>> {
        let tables = self.tables.read().await;
        Ok(tables.toponyms.iter().find(|t| t.id == id).cloned())
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Toponym>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Toponym> = tables
            .toponyms
            .iter()
            .filter(|t| tables.streetcode_toponyms.contains(&(streetcode_id, t.id)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.street_name.cmp(&b.street_name).then(a.id.cmp(&b.id)));
        Ok(rows)
    }
}

#[async_trait]
impl TermRepository for MemoryRepositories {
    async fn list_terms(&self) -> RepoResult<Vec<Term>> {
        let mut terms = self.tables.read().await.terms.clone();
        terms.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(terms)
    }

    async fn find_term(&self, id: DbId) -> RepoResult<Option<Term>> {
        let tables = self.tables.read().await;
        Ok(tables.terms.iter().find(|t| t.id == id).cloned())
    }

    async fn list_related(&self, term_id: DbId) -> RepoResult<Vec<RelatedTerm>> {
        let tables = self.tables.read().await;
        Ok(tables
            .related_terms
            .iter()
            .filter(|r| r.term_id == term_id)
            .cloned()
            .collect())
    }

    async fn list_all_related(&self) -> RepoResult<Vec<RelatedTerm>> {
        Ok(self.tables.read().await.related_terms.clone())
    }

    async fn find_related(&self, term_id: DbId, word: &str) -> RepoResult<Option<RelatedTerm>> {
        let tables = self.tables.read().await;
        Ok(tables
            .related_terms
            .iter()
            .find(|r| r.term_id == term_id && r.word == word)
            .cloned())
    }

    async fn find_related_by_word(&self, word: &str) -> RepoResult<Option<RelatedTerm>> {
        let tables = self.tables.read().await;
        Ok(tables.related_terms.iter().find(|r| r.word == word).cloned())
    }

    async fn create_related(&self, term_id: DbId, word: &str) -> RepoResult<RelatedTerm> {
        let mut tables = self.tables.write().await;
        let related = RelatedTerm {
            id: tables.next_id(),
            term_id,
            word: word.to_string(),
        };
        tables.related_terms.push(related.clone());
        Ok(related)
    }

    async fn delete_related(&self, id: DbId) -> RepoResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.related_terms.len();
        tables.related_terms.retain(|r| r.id != id);
        Ok((before - tables.related_terms.len()) as u64)
    }
}

#[async_trait]
impl NewsRepository for MemoryRepositories {
    async fn list_all(&self) -> RepoResult<Vec<News>> {
        let mut news = self.tables.read().await.news.clone();
        news.sort_by_key(|n| (n.creation_date, n.id));
        Ok(news)
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<News>> {
        let tables = self.tables.read().await;
        Ok(tables.news.iter().find(|n| n.id == id).cloned())
    }

    async fn find_by_url(&self, url: &str) -> RepoResult<Option<News>> {
        let tables = self.tables.read().await;
        Ok(tables.news.iter().find(|n| n.url == url).cloned())
    }

    async fn create(&self, input: &NewsInput) -> RepoResult<News> {
        let mut tables = self.tables.write().await;
        let news = News {
            id: tables.next_id(),
            title: input.title.clone(),
            text: input.text.clone(),
            url: input.url.clone(),
            image_id: input.image_id,
            creation_date: input.creation_date,
        };
        tables.news.push(news.clone());
        Ok(news)
    }

    async fn update(&self, id: DbId, input: &NewsInput) -> RepoResult<Option<News>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.news.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        row.title = input.title.clone();
        row.text = input.text.clone();
        row.url = input.url.clone();
        row.image_id = input.image_id;
        row.creation_date = input.creation_date;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: DbId) -> RepoResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.news.len();
        tables.news.retain(|n| n.id != id);
        Ok((before - tables.news.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toponym(id: DbId, street_name: &str) -> Toponym {
        Toponym {
            id,
            oblast: "Львівська".into(),
            adminregion_old: None,
            adminregion_new: None,
            gromada: None,
            community: None,
            street_name: street_name.into(),
            street_type: Some("вулиця".into()),
        }
    }

    #[tokio::test]
    async fn toponym_filter_is_case_insensitive() {
        let repos = MemoryRepositories::new();
        repos
            .seed(|t| {
                t.toponyms.push(toponym(1, "Шевченка"));
                t.toponyms.push(toponym(2, "Франка"));
            })
            .await;

        let rows = ToponymRepository::list_all(&repos, Some("шевч")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(ToponymRepository::list_all(&repos, None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn news_listed_in_creation_order() {
        let repos = MemoryRepositories::new();
        let now = Utc::now();
        for (url, offset) in [("b", 2), ("a", 1), ("c", 3)] {
            NewsRepository::create(
                &repos,
                &NewsInput {
                    title: url.into(),
                    text: "t".into(),
                    url: url.into(),
                    image_id: None,
                    creation_date: now + chrono::Duration::days(offset),
                },
            )
            .await
            .unwrap();
        }
        let urls: Vec<String> = NewsRepository::list_all(&repos)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.url)
            .collect();
        assert_eq!(urls, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn related_terms_round_trip() {
        let repos = MemoryRepositories::new();
        let created = repos.create_related(7, "кобзаря").await.unwrap();
        assert!(repos.find_related(7, "кобзаря").await.unwrap().is_some());
        assert_eq!(repos.delete_related(created.id).await.unwrap(), 1);
        assert!(repos.find_related_by_word("кобзаря").await.unwrap().is_none());
    }
}
