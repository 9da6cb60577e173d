use async_trait::async_trait;
use streetcode_core::error::CoreError;
use streetcode_core::types::DbId;
use streetcode_db::models::source::SourceLinkCategory;

use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::source::{CategoryContentDto, CategoryNameDto, SourceLinkCategoryDto};
use crate::error::{not_found, ServiceResult};
use crate::requests::image::load_optional;

async fn with_image(
    ctx: &AppContext,
    category: SourceLinkCategory,
) -> ServiceResult<SourceLinkCategoryDto> {
    let image = load_optional(ctx, category.image_id).await?;
    Ok(SourceLinkCategoryDto {
        image,
        ..SourceLinkCategoryDto::from(category)
    })
}

pub struct GetAllCategories;

#[async_trait]
impl Request for GetAllCategories {
    type Response = Vec<SourceLinkCategoryDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<SourceLinkCategoryDto>> {
        let categories = ctx.repos.sources().list_categories().await?;
        let mut dtos = Vec::with_capacity(categories.len());
        for category in categories {
            dtos.push(with_image(ctx, category).await?);
        }
        Ok(dtos)
    }
}

pub struct GetAllCategoryNames;

#[async_trait]
impl Request for GetAllCategoryNames {
    type Response = Vec<CategoryNameDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<CategoryNameDto>> {
        let categories = ctx.repos.sources().list_categories().await?;
        Ok(categories.into_iter().map(CategoryNameDto::from).collect())
    }
}

pub struct GetCategoryById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetCategoryById {
    type Response = SourceLinkCategoryDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<SourceLinkCategoryDto> {
        let Some(category) = ctx.repos.sources().find_category(self.id).await? else {
            return Err(not_found(format!(
                "Cannot find any srcCategory by the corresponding id: {}",
                self.id
            )));
        };
        with_image(ctx, category).await
    }
}

/// Categories that have content for the streetcode. An empty result is a
/// failure.
pub struct GetCategoriesByStreetcodeId {
    pub streetcode_id: DbId,
}

#[async_trait]
impl Request for GetCategoriesByStreetcodeId {
    type Response = Vec<SourceLinkCategoryDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<SourceLinkCategoryDto>> {
        let id = self.streetcode_id;
        let categories = ctx.repos.sources().list_categories_by_streetcode(id).await?;
        if categories.is_empty() {
            return Err(not_found(format!(
                "Cant find any source category with the streetcode id {id}"
            )));
        }

        let mut dtos = Vec::with_capacity(categories.len());
        for category in categories {
            dtos.push(with_image(ctx, category).await?);
        }
        Ok(dtos)
    }
}

pub struct GetCategoryContentByStreetcodeId {
    pub streetcode_id: DbId,
    pub category_id: DbId,
}

#[async_trait]
impl Request for GetCategoryContentByStreetcodeId {
    type Response = CategoryContentDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<CategoryContentDto> {
        let id = self.streetcode_id;
        if ctx.repos.streetcodes().find_by_id(id).await?.is_none() {
            return Err(not_found(format!("No such streetcode with id = {id}")));
        }

        match ctx.repos.sources().find_content(id, self.category_id).await? {
            Some(content) => Ok(content.into()),
            None => {
                tracing::error!(
                    streetcode_id = id,
                    category_id = self.category_id,
                    "The streetcode content is null",
                );
                Err(CoreError::NotFound("The streetcode content is null".into()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use streetcode_db::models::source::StreetcodeCategoryContent;

    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::{memory_context, seed_image, seed_streetcode};

    #[tokio::test]
    async fn categories_by_streetcode_follow_content_rows() {
        let (ctx, repos, blobs) = memory_context();
        blobs.insert("portrait.png", b"hello".to_vec()).await;
        let image_id = seed_image(&repos).await;
        let streetcode = seed_streetcode(&repos, 1, "Ivan Franko", true).await;

        let category_id = repos
            .seed(|t| {
                let books = t.next_id();
                t.categories.push(SourceLinkCategory {
                    id: books,
                    title: "Books".into(),
                    image_id: Some(image_id),
                });
                let films = t.next_id();
                t.categories.push(SourceLinkCategory {
                    id: films,
                    title: "Films".into(),
                    image_id: None,
                });
                t.category_contents.push(StreetcodeCategoryContent {
                    source_link_category_id: books,
                    streetcode_id: streetcode.id,
                    text: Some("Zakhar Berkut".into()),
                });
                books
            })
            .await;

        let categories = GetCategoriesByStreetcodeId {
            streetcode_id: streetcode.id,
        }
        .handle(&ctx)
        .await
        .unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Books");
        let image = categories[0].image.as_ref().unwrap();
        assert_eq!(image.base64.as_deref(), Some("aGVsbG8="));

        let content = GetCategoryContentByStreetcodeId {
            streetcode_id: streetcode.id,
            category_id,
        }
        .handle(&ctx)
        .await
        .unwrap();
        assert_eq!(content.text.as_deref(), Some("Zakhar Berkut"));

        let names = GetAllCategoryNames.handle(&ctx).await.unwrap();
        assert_eq!(names.len(), 2);
    }

    #[tokio::test]
    async fn empty_category_list_is_not_found() {
        let (ctx, repos, _) = memory_context();
        let streetcode = seed_streetcode(&repos, 1, "Ivan Franko", true).await;
        assert_matches!(
            GetCategoriesByStreetcodeId { streetcode_id: streetcode.id }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::NotFound(msg)))
                if msg.starts_with("Cant find any source category")
        );
    }

    #[tokio::test]
    async fn content_lookup_distinguishes_missing_streetcode_and_content() {
        let (ctx, repos, _) = memory_context();
        let streetcode = seed_streetcode(&repos, 1, "Ivan Franko", true).await;

        assert_matches!(
            GetCategoryContentByStreetcodeId { streetcode_id: 99, category_id: 1 }
                .handle(&ctx)
                .await,
            Err(ServiceError::Core(CoreError::NotFound(msg)))
                if msg == "No such streetcode with id = 99"
        );
        assert_matches!(
            GetCategoryContentByStreetcodeId { streetcode_id: streetcode.id, category_id: 1 }
                .handle(&ctx)
                .await,
            Err(ServiceError::Core(CoreError::NotFound(msg)))
                if msg == "The streetcode content is null"
        );
    }
}
