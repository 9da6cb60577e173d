use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::types::DbId;
use streetcode_services::requests::tag::{GetAllTags, GetTagsByStreetcodeId};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = state.dispatcher.send(GetAllTags).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// GET /api/v1/streetcodes/{id}/tags
pub async fn list_streetcode_tags(
    State(state): State<AppState>,
    Path(streetcode_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tags = state
        .dispatcher
        .send(GetTagsByStreetcodeId { streetcode_id })
        .await?;

    Ok(Json(DataResponse { data: tags }))
}
