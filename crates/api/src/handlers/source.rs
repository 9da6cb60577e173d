use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::types::DbId;
use streetcode_services::requests::source::{
    GetAllCategories, GetAllCategoryNames, GetCategoriesByStreetcodeId, GetCategoryById,
    GetCategoryContentByStreetcodeId,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/source-categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.dispatcher.send(GetAllCategories).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/source-categories/names
pub async fn list_category_names(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let names = state.dispatcher.send(GetAllCategoryNames).await?;
    Ok(Json(DataResponse { data: names }))
}

/// GET /api/v1/source-categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = state.dispatcher.send(GetCategoryById { id }).await?;
    Ok(Json(DataResponse { data: category }))
}

/// GET /api/v1/streetcodes/{id}/source-categories
pub async fn list_streetcode_categories(
    State(state): State<AppState>,
    Path(streetcode_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let categories = state
        .dispatcher
        .send(GetCategoriesByStreetcodeId { streetcode_id })
        .await?;

    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/streetcodes/{id}/source-categories/{category_id}/content
pub async fn get_category_content(
    State(state): State<AppState>,
    Path((streetcode_id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let content = state
        .dispatcher
        .send(GetCategoryContentByStreetcodeId {
            streetcode_id,
            category_id,
        })
        .await?;

    Ok(Json(DataResponse { data: content }))
}
