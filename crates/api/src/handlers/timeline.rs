use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::types::DbId;
use streetcode_services::requests::timeline::{
    GetAllTimelineItems, GetTimelineItemById, GetTimelineItemsByStreetcodeId,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/timeline-items
pub async fn list_timeline_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.dispatcher.send(GetAllTimelineItems).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/timeline-items/{id}
pub async fn get_timeline_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = state.dispatcher.send(GetTimelineItemById { id }).await?;
    Ok(Json(DataResponse { data: item }))
}

/// GET /api/v1/streetcodes/{id}/timeline-items
pub async fn list_streetcode_timeline_items(
    State(state): State<AppState>,
    Path(streetcode_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let items = state
        .dispatcher
        .send(GetTimelineItemsByStreetcodeId { streetcode_id })
        .await?;

    Ok(Json(DataResponse { data: items }))
}
