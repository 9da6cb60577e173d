//! Handlers for streetcode CRUD and the filter search.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::error::CoreError;
use streetcode_core::types::DbId;
use streetcode_services::dto::streetcode::{StreetcodeCreateDto, StreetcodeUpdateDto};
use streetcode_services::requests::streetcode::{
    CreateStreetcode, DeleteStreetcode, GetStreetcodeByFilter, GetStreetcodeById,
    UpdateStreetcode,
};

use crate::error::{AppError, AppResult};
use crate::query::FilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/streetcodes
pub async fn create_streetcode(
    State(state): State<AppState>,
    Json(body): Json<StreetcodeCreateDto>,
) -> AppResult<impl IntoResponse> {
    let created = state
        .dispatcher
        .send(CreateStreetcode { streetcode: body })
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /api/v1/streetcodes
pub async fn update_streetcode(
    State(state): State<AppState>,
    Json(body): Json<StreetcodeUpdateDto>,
) -> AppResult<impl IntoResponse> {
    let updated = state
        .dispatcher
        .send(UpdateStreetcode { streetcode: body })
        .await?;

    Ok(Json(DataResponse { data: updated }))
}

/// GET /api/v1/streetcodes/{id}
///
/// A streetcode that does not exist is a 404 rather than a `null` body.
pub async fn get_streetcode(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let streetcode = state
        .dispatcher
        .send(GetStreetcodeById { id })
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound(format!(
                "Cannot find any Streetcode with corresponding Id: {id}"
            )))
        })?;

    Ok(Json(DataResponse { data: streetcode }))
}

/// DELETE /api/v1/streetcodes/{id}
pub async fn delete_streetcode(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.dispatcher.send(DeleteStreetcode { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/streetcodes/filter?searchQuery=
pub async fn filter_streetcodes(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<impl IntoResponse> {
    let hits = state
        .dispatcher
        .send(GetStreetcodeByFilter {
            search_query: params.search_query,
        })
        .await?;

    Ok(Json(DataResponse { data: hits }))
}
