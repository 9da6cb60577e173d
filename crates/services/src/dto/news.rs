use serde::{Deserialize, Serialize};
use streetcode_core::types::{DbId, Timestamp};
use streetcode_core::validation::news::NewsFields;
use streetcode_db::models::news::{News, NewsInput};

use super::media::ImageDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    pub id: DbId,
    pub title: String,
    pub text: String,
    pub url: String,
    pub image_id: Option<DbId>,
    pub image: Option<ImageDto>,
    pub creation_date: Timestamp,
}

impl From<News> for NewsDto {
    fn from(row: News) -> Self {
        Self {
            id: row.id,
            title: row.title,
            text: row.text,
            url: row.url,
            image_id: row.image_id,
            image: None,
            creation_date: row.creation_date,
        }
    }
}

/// Create and update body for news. `id` is only read on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsInputDto {
    #[serde(default)]
    pub id: DbId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_id: Option<DbId>,
    #[serde(default)]
    pub creation_date: Option<Timestamp>,
}

impl NewsInputDto {
    pub fn fields(&self) -> NewsFields<'_> {
        NewsFields {
            title: &self.title,
            text: &self.text,
            url: &self.url,
            creation_date: self.creation_date,
            image_id: self.image_id,
        }
    }

    /// Repository input, or `None` without a creation date. The validator
    /// rejects that case before any handler runs. An image id of zero
    /// means none.
    pub fn to_input(&self) -> Option<NewsInput> {
        Some(NewsInput {
            title: self.title.clone(),
            text: self.text.clone(),
            url: self.url.clone(),
            image_id: self.image_id.filter(|id| *id > 0),
            creation_date: self.creation_date?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomNewsDto {
    pub title: String,
    pub url: String,
}

/// A news article with links to its neighbours and a random suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsWithUrlsDto {
    pub news: NewsDto,
    pub prev_news_url: Option<String>,
    pub next_news_url: Option<String>,
    pub random_news: RandomNewsDto,
}
