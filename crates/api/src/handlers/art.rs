use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::types::DbId;
use streetcode_services::requests::art::{GetAllArts, GetArtById, GetArtsByStreetcodeId};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/arts
pub async fn list_arts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let arts = state.dispatcher.send(GetAllArts).await?;
    Ok(Json(DataResponse { data: arts }))
}

/// GET /api/v1/arts/{id}
pub async fn get_art(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let art = state.dispatcher.send(GetArtById { id }).await?;
    Ok(Json(DataResponse { data: art }))
}

/// GET /api/v1/streetcodes/{id}/arts
pub async fn list_streetcode_arts(
    State(state): State<AppState>,
    Path(streetcode_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let arts = state
        .dispatcher
        .send(GetArtsByStreetcodeId { streetcode_id })
        .await?;

    Ok(Json(DataResponse { data: arts }))
}
