use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::error::CoreError;
use streetcode_core::types::DbId;
use streetcode_services::dto::content::FactCreateDto;
use streetcode_services::requests::fact::{CreateFact, GetFactById, GetFactsByStreetcodeId};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/facts/{id}
pub async fn get_fact(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let fact = state
        .dispatcher
        .send(GetFactById { id })
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound(format!(
                "Cannot find any fact with corresponding id: {id}"
            )))
        })?;

    Ok(Json(DataResponse { data: fact }))
}

/// GET /api/v1/streetcodes/{id}/facts
pub async fn list_streetcode_facts(
    State(state): State<AppState>,
    Path(streetcode_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let facts = state
        .dispatcher
        .send(GetFactsByStreetcodeId { streetcode_id })
        .await?;

    Ok(Json(DataResponse { data: facts }))
}

/// POST /api/v1/streetcodes/{id}/facts
pub async fn create_fact(
    State(state): State<AppState>,
    Path(streetcode_id): Path<DbId>,
    Json(body): Json<FactCreateDto>,
) -> AppResult<impl IntoResponse> {
    let fact = state
        .dispatcher
        .send(CreateFact {
            streetcode_id,
            fact: body,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: fact })))
}
