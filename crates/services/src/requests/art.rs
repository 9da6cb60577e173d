use async_trait::async_trait;
use streetcode_core::types::DbId;
use streetcode_db::models::art::Art;

use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::content::ArtDto;
use crate::error::{not_found, ServiceResult};
use crate::requests::image::load_optional;

async fn with_image(ctx: &AppContext, art: Art) -> ServiceResult<ArtDto> {
    let image = load_optional(ctx, Some(art.image_id)).await?;
    Ok(ArtDto {
        image,
        ..ArtDto::from(art)
    })
}

async fn with_images(ctx: &AppContext, arts: Vec<Art>) -> ServiceResult<Vec<ArtDto>> {
    let mut dtos = Vec::with_capacity(arts.len());
    for art in arts {
        dtos.push(with_image(ctx, art).await?);
    }
    Ok(dtos)
}

pub struct GetAllArts;

#[async_trait]
impl Request for GetAllArts {
    type Response = Vec<ArtDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<ArtDto>> {
        let arts = ctx.repos.arts().list_all().await?;
        with_images(ctx, arts).await
    }
}

pub struct GetArtById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetArtById {
    type Response = ArtDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<ArtDto> {
        let Some(art) = ctx.repos.arts().find_by_id(self.id).await? else {
            return Err(not_found(format!(
                "Cannot find an art with corresponding id: {}",
                self.id
            )));
        };
        with_image(ctx, art).await
    }
}

pub struct GetArtsByStreetcodeId {
    pub streetcode_id: DbId,
}

#[async_trait]
impl Request for GetArtsByStreetcodeId {
    type Response = Vec<ArtDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<ArtDto>> {
        let id = self.streetcode_id;
        if ctx.repos.streetcodes().find_by_id(id).await?.is_none() {
            return Err(not_found(format!(
                "Cannot find any art with corresponding streetcode id: {id}"
            )));
        }
        let arts = ctx.repos.arts().list_by_streetcode(id).await?;
        with_images(ctx, arts).await
    }
}
