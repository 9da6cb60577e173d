use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::types::DbId;
use streetcode_services::requests::image::GetImageById;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/images/{id}
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let image = state.dispatcher.send(GetImageById { id }).await?;
    Ok(Json(DataResponse { data: image }))
}
