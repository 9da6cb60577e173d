use async_trait::async_trait;
use streetcode_core::types::DbId;
use streetcode_db::models::timeline::TimelineItem;

use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::content::TimelineItemDto;
use crate::error::{not_found, ServiceResult};

/// Attach historical contexts to a batch of items with one lookup.
async fn with_contexts(
    ctx: &AppContext,
    items: Vec<TimelineItem>,
) -> ServiceResult<Vec<TimelineItemDto>> {
    let ids: Vec<DbId> = items.iter().map(|i| i.id).collect();
    let contexts = ctx.repos.timeline().list_contexts(&ids).await?;
    Ok(items
        .into_iter()
        .map(|item| TimelineItemDto::with_contexts(item, &contexts))
        .collect())
}

pub struct GetAllTimelineItems;

#[async_trait]
impl Request for GetAllTimelineItems {
    type Response = Vec<TimelineItemDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<TimelineItemDto>> {
        let items = ctx.repos.timeline().list_all().await?;
        with_contexts(ctx, items).await
    }
}

pub struct GetTimelineItemById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetTimelineItemById {
    type Response = TimelineItemDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<TimelineItemDto> {
        let Some(item) = ctx.repos.timeline().find_by_id(self.id).await? else {
            return Err(not_found(format!(
                "Cannot find a timeline item with corresponding id: {}",
                self.id
            )));
        };
        let mut dtos = with_contexts(ctx, vec![item]).await?;
        Ok(dtos.remove(0))
    }
}

/// Items of one streetcode in date order. Fails only when the streetcode
/// itself does not exist.
pub struct GetTimelineItemsByStreetcodeId {
    pub streetcode_id: DbId,
}

#[async_trait]
impl Request for GetTimelineItemsByStreetcodeId {
    type Response = Vec<TimelineItemDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<TimelineItemDto>> {
        let id = self.streetcode_id;
        if ctx.repos.streetcodes().find_by_id(id).await?.is_none() {
            return Err(not_found(format!(
                "Cannot find any timeline item by the streetcode id: {id}"
            )));
        }
        let items = ctx.repos.timeline().list_by_streetcode(id).await?;
        with_contexts(ctx, items).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};
    use streetcode_core::error::CoreError;
    use streetcode_db::models::timeline::TimelineContext;

    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::{memory_context, seed_streetcode};

    #[tokio::test]
    async fn items_carry_their_contexts_in_date_order() {
        let (ctx, repos, _) = memory_context();
        let streetcode = seed_streetcode(&repos, 1, "Ivan Franko", true).await;
        let (late, early) = repos
            .seed(|t| {
                let late = t.next_id();
                t.timeline_items.push(TimelineItem {
                    id: late,
                    streetcode_id: streetcode.id,
                    date: Utc.with_ymd_and_hms(1916, 5, 28, 0, 0, 0).unwrap(),
                    date_view_pattern: 0,
                    title: "Death".into(),
                    description: None,
                });
                let early = t.next_id();
                t.timeline_items.push(TimelineItem {
                    id: early,
                    streetcode_id: streetcode.id,
                    date: Utc.with_ymd_and_hms(1856, 8, 27, 0, 0, 0).unwrap(),
                    date_view_pattern: 0,
                    title: "Birth".into(),
                    description: None,
                });
                let context_id = t.next_id();
                t.timeline_contexts.push(TimelineContext {
                    timeline_id: early,
                    id: context_id,
                    title: "Austrian Galicia".into(),
                });
                (late, early)
            })
            .await;

        let items = GetTimelineItemsByStreetcodeId {
            streetcode_id: streetcode.id,
        }
        .handle(&ctx)
        .await
        .unwrap();
        let ids: Vec<DbId> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![early, late]);
        assert_eq!(items[0].historical_contexts[0].title, "Austrian Galicia");
        assert!(items[1].historical_contexts.is_empty());
    }

    #[tokio::test]
    async fn streetcode_without_items_is_an_empty_list() {
        let (ctx, repos, _) = memory_context();
        let streetcode = seed_streetcode(&repos, 1, "Ivan Franko", true).await;
        let items = GetTimelineItemsByStreetcodeId {
            streetcode_id: streetcode.id,
        }
        .handle(&ctx)
        .await
        .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn missing_streetcode_and_item_are_not_found() {
        let (ctx, _, _) = memory_context();
        assert_matches!(
            GetTimelineItemsByStreetcodeId { streetcode_id: 5 }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::NotFound(msg)))
                if msg == "Cannot find any timeline item by the streetcode id: 5"
        );
        assert_matches!(
            GetTimelineItemById { id: 6 }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::NotFound(_)))
        );
    }
}
