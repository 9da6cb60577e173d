use async_trait::async_trait;
use streetcode_core::types::DbId;
use streetcode_db::models::fact::NewFact;

use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::content::{FactCreateDto, FactDto};
use crate::error::{not_found, ServiceResult, WriteResultExt};

pub struct CreateFact {
    pub streetcode_id: DbId,
    pub fact: FactCreateDto,
}

#[async_trait]
impl Request for CreateFact {
    type Response = FactDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<FactDto> {
        if ctx.repos.streetcodes().find_by_id(self.streetcode_id).await?.is_none() {
            return Err(not_found("Streetcode not found".to_string()));
        }

        let input = NewFact {
            streetcode_id: self.streetcode_id,
            title: self.fact.title,
            fact_content: self.fact.fact_content,
            image_id: self.fact.image_id.filter(|id| *id > 0),
        };
        let fact = ctx
            .repos
            .facts()
            .create(&input)
            .await
            .or_persistence("Failed to create a fact")?;

        tracing::info!(fact_id = fact.id, streetcode_id = fact.streetcode_id, "Fact created");
        Ok(fact.into())
    }
}

pub struct GetFactById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetFactById {
    type Response = Option<FactDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Option<FactDto>> {
        Ok(ctx.repos.facts().find_by_id(self.id).await?.map(FactDto::from))
    }
}

pub struct GetFactsByStreetcodeId {
    pub streetcode_id: DbId,
}

#[async_trait]
impl Request for GetFactsByStreetcodeId {
    type Response = Vec<FactDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<FactDto>> {
        let facts = ctx.repos.facts().list_by_streetcode(self.streetcode_id).await?;
        Ok(facts.into_iter().map(FactDto::from).collect())
    }
}
