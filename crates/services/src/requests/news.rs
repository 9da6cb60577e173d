//! News commands and queries.

use async_trait::async_trait;
use streetcode_core::error::CoreError;
use streetcode_core::news::navigation;
use streetcode_core::types::DbId;
use streetcode_core::validation::news::MSG_NEWS_DATE_REQUIRED;
use streetcode_db::models::news::{News, NewsInput};

use crate::blob::BlobError;
use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::news::{NewsDto, NewsInputDto, NewsWithUrlsDto, RandomNewsDto};
use crate::error::{not_found, persistence, ServiceResult, WriteResultExt};
use crate::requests::image::load_optional;

async fn with_image(ctx: &AppContext, news: News) -> ServiceResult<NewsDto> {
    let image = load_optional(ctx, news.image_id).await?;
    Ok(NewsDto {
        image,
        ..NewsDto::from(news)
    })
}

async fn with_images(ctx: &AppContext, rows: Vec<News>) -> ServiceResult<Vec<NewsDto>> {
    let mut dtos = Vec::with_capacity(rows.len());
    for news in rows {
        dtos.push(with_image(ctx, news).await?);
    }
    Ok(dtos)
}

/// The validator rejects a missing creation date before any handler runs.
fn input_of(dto: &NewsInputDto) -> ServiceResult<NewsInput> {
    dto.to_input()
        .ok_or_else(|| CoreError::Validation(MSG_NEWS_DATE_REQUIRED.into()).into())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub struct CreateNews {
    pub news: NewsInputDto,
}

#[async_trait]
impl Request for CreateNews {
    type Response = NewsDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<NewsDto> {
        let input = input_of(&self.news)?;
        let news = ctx
            .repos
            .news()
            .create(&input)
            .await
            .or_persistence("Failed to create a news")?;

        tracing::info!(news_id = news.id, url = %news.url, "News created");
        with_image(ctx, news).await
    }
}

pub struct UpdateNews {
    pub news: NewsInputDto,
}

#[async_trait]
impl Request for UpdateNews {
    type Response = NewsDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<NewsDto> {
        let input = input_of(&self.news)?;
        let Some(news) = ctx.repos.news().update(self.news.id, &input).await? else {
            return Err(persistence("Failed to update news"));
        };

        tracing::info!(news_id = news.id, "News updated");
        with_image(ctx, news).await
    }
}

/// Delete a news article together with its image row and blob.
pub struct DeleteNews {
    pub id: DbId,
}

#[async_trait]
impl Request for DeleteNews {
    type Response = ();

    async fn handle(self, ctx: &AppContext) -> ServiceResult<()> {
        let Some(news) = ctx.repos.news().find_by_id(self.id).await? else {
            return Err(not_found(format!(
                "No news found by entered Id - {}",
                self.id
            )));
        };

        if ctx.repos.news().delete(news.id).await? == 0 {
            return Err(persistence("Failed to delete news"));
        }

        if let Some(image_id) = news.image_id {
            if let Some(image) = ctx.repos.images().find_by_id(image_id).await? {
                ctx.repos.images().delete(image.id).await?;
                if let Some(name) = image.blob_name.filter(|n| !n.is_empty()) {
                    match ctx.blobs.delete_file(&name).await {
                        Ok(()) | Err(BlobError::NotFound(_)) => {}
                        Err(e) => return Err(e.into()),
                    }
                }
            }
        }

        tracing::info!(news_id = news.id, "News deleted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

pub struct GetAllNews;

#[async_trait]
impl Request for GetAllNews {
    type Response = Vec<NewsDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<NewsDto>> {
        let rows = ctx.repos.news().list_all().await?;
        with_images(ctx, rows).await
    }
}

pub struct GetNewsById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetNewsById {
    type Response = NewsDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<NewsDto> {
        let Some(news) = ctx.repos.news().find_by_id(self.id).await? else {
            return Err(not_found(format!("No news by entered Id - {}", self.id)));
        };
        with_image(ctx, news).await
    }
}

pub struct GetNewsByUrl {
    pub url: String,
}

#[async_trait]
impl Request for GetNewsByUrl {
    type Response = NewsDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<NewsDto> {
        let Some(news) = ctx.repos.news().find_by_url(&self.url).await? else {
            return Err(not_found(format!("No news by entered Url - {}", self.url)));
        };
        with_image(ctx, news).await
    }
}

/// All news, newest first.
pub struct SortedByDateTime;

#[async_trait]
impl Request for SortedByDateTime {
    type Response = Vec<NewsDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<NewsDto>> {
        let mut rows = ctx.repos.news().list_all().await?;
        rows.reverse();
        with_images(ctx, rows).await
    }
}

/// A news article with its previous/next URLs in creation order and a
/// random suggestion.
pub struct GetNewsAndLinksByUrl {
    pub url: String,
}

#[async_trait]
impl Request for GetNewsAndLinksByUrl {
    type Response = NewsWithUrlsDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<NewsWithUrlsDto> {
        let mut rows = ctx.repos.news().list_all().await?;
        let nav = rows
            .iter()
            .position(|n| n.url == self.url)
            .and_then(|current| {
                let mut rng = rand::rng();
                navigation(rows.len(), current, &mut rng).map(|nav| (current, nav))
            });
        let Some((current, nav)) = nav else {
            return Err(not_found(format!("No news by entered Url - {}", self.url)));
        };

        let prev_news_url = nav.prev.map(|i| rows[i].url.clone());
        let next_news_url = nav.next.map(|i| rows[i].url.clone());
        let random_news = RandomNewsDto {
            title: rows[nav.random].title.clone(),
            url: rows[nav.random].url.clone(),
        };
        let news = with_image(ctx, rows.swap_remove(current)).await?;

        Ok(NewsWithUrlsDto {
            news,
            prev_news_url,
            next_news_url,
            random_news,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Utc};
    use streetcode_core::validation::news::MSG_NEWS_IMAGE_ID;
    use streetcode_db::models::image::NewImage;
    use streetcode_db::repositories::ImageRepository;

    use super::*;
    use crate::dispatch::Dispatcher;
    use crate::error::ServiceError;
    use crate::test_support::memory_context;

    fn body(title: &str, url: &str, day: i64) -> NewsInputDto {
        NewsInputDto {
            title: title.into(),
            text: format!("{title} text"),
            url: url.into(),
            creation_date: Some(
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day),
            ),
            ..NewsInputDto::default()
        }
    }

    async fn seed(ctx: &AppContext, count: i64) {
        for day in 0..count {
            CreateNews {
                news: body(&format!("News {day}"), &format!("news-{day}"), day),
            }
            .handle(ctx)
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn zero_image_id_fails_validation() {
        let (ctx, _, _) = memory_context();
        let dispatcher = Dispatcher::new(ctx);
        let mut news = body("Opening", "opening", 0);
        news.image_id = Some(0);

        assert_matches!(
            dispatcher.send(CreateNews { news }).await,
            Err(ServiceError::Core(CoreError::InvalidFields(v)))
                if v.iter().any(|f| f.message == MSG_NEWS_IMAGE_ID)
        );
    }

    #[tokio::test]
    async fn sorted_is_newest_first() {
        let (ctx, _, _) = memory_context();
        seed(&ctx, 3).await;
        let sorted = SortedByDateTime.handle(&ctx).await.unwrap();
        let urls: Vec<&str> = sorted.iter().map(|n| n.url.as_str()).collect();
        assert_eq!(urls, vec!["news-2", "news-1", "news-0"]);
    }

    #[tokio::test]
    async fn links_with_few_news_suggest_the_current_one() {
        let (ctx, _, _) = memory_context();
        seed(&ctx, 3).await;
        let links = GetNewsAndLinksByUrl { url: "news-1".into() }
            .handle(&ctx)
            .await
            .unwrap();
        assert_eq!(links.news.url, "news-1");
        assert_eq!(links.prev_news_url.as_deref(), Some("news-0"));
        assert_eq!(links.next_news_url.as_deref(), Some("news-2"));
        assert_eq!(links.random_news.url, "news-1");
    }

    #[tokio::test]
    async fn links_with_many_news_suggest_a_non_neighbour() {
        let (ctx, _, _) = memory_context();
        seed(&ctx, 4).await;
        let links = GetNewsAndLinksByUrl { url: "news-0".into() }
            .handle(&ctx)
            .await
            .unwrap();
        assert_eq!(links.prev_news_url, None);
        assert_eq!(links.next_news_url.as_deref(), Some("news-1"));
        assert!(["news-2", "news-3"].contains(&links.random_news.url.as_str()));
    }

    #[tokio::test]
    async fn unknown_url_is_not_found() {
        let (ctx, _, _) = memory_context();
        assert_matches!(
            GetNewsAndLinksByUrl { url: "missing".into() }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::NotFound(_)))
        );
    }

    #[tokio::test]
    async fn delete_removes_news_image_and_blob() {
        let (ctx, repos, blobs) = memory_context();
        blobs.insert("cover.png", b"hello".to_vec()).await;
        let image = ImageRepository::create(
            &repos,
            &NewImage {
                blob_name: "cover.png".into(),
                mime_type: "image/png".into(),
            },
        )
        .await
        .unwrap();

        let mut news = body("Opening", "opening", 0);
        news.image_id = Some(image.id);
        let created = CreateNews { news }.handle(&ctx).await.unwrap();
        assert_eq!(
            created.image.as_ref().and_then(|i| i.base64.as_deref()),
            Some("aGVsbG8=")
        );

        DeleteNews { id: created.id }.handle(&ctx).await.unwrap();
        assert!(!blobs.contains("cover.png").await);
        assert!(ImageRepository::find_by_id(&repos, image.id).await.unwrap().is_none());
        assert_matches!(
            DeleteNews { id: created.id }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::NotFound(msg)))
                if msg == format!("No news found by entered Id - {}", created.id)
        );
    }

    #[tokio::test]
    async fn listing_survives_a_missing_image_blob() {
        let (ctx, repos, _) = memory_context();
        let image = ImageRepository::create(
            &repos,
            &NewImage {
                blob_name: "lost.png".into(),
                mime_type: "image/png".into(),
            },
        )
        .await
        .unwrap();

        let mut news = body("Opening", "opening", 0);
        news.image_id = Some(image.id);
        CreateNews { news }.handle(&ctx).await.unwrap();
        CreateNews {
            news: body("Closing", "closing", 1),
        }
        .handle(&ctx)
        .await
        .unwrap();

        let all = GetAllNews.handle(&ctx).await.unwrap();
        assert_eq!(all.len(), 2);
        let opening = all.iter().find(|n| n.url == "opening").unwrap();
        let image = opening.image.as_ref().unwrap();
        assert_eq!(image.id, opening.image_id.unwrap());
        assert_eq!(image.base64, None);
    }

    #[tokio::test]
    async fn update_of_missing_news_is_a_persistence_failure() {
        let (ctx, _, _) = memory_context();
        let mut news = body("Opening", "opening", 0);
        news.id = 404;
        assert_matches!(
            UpdateNews { news }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::Persistence(msg))) if msg == "Failed to update news"
        );
    }
}
