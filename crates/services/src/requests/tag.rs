use async_trait::async_trait;
use streetcode_core::types::DbId;

use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::tag::{StreetcodeTagDto, TagDto};
use crate::error::ServiceResult;

pub struct GetAllTags;

#[async_trait]
impl Request for GetAllTags {
    type Response = Vec<TagDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<TagDto>> {
        let tags = ctx.repos.tags().list_all().await?;
        Ok(tags.into_iter().map(TagDto::from).collect())
    }
}

/// Tags of one streetcode in display order.
pub struct GetTagsByStreetcodeId {
    pub streetcode_id: DbId,
}

#[async_trait]
impl Request for GetTagsByStreetcodeId {
    type Response = Vec<StreetcodeTagDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<StreetcodeTagDto>> {
        let tags = ctx.repos.tags().list_by_streetcode(self.streetcode_id).await?;
        Ok(tags.into_iter().map(StreetcodeTagDto::from).collect())
    }
}
