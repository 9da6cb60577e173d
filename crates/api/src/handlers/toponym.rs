use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::types::DbId;
use streetcode_services::requests::toponym::{
    GetAllToponyms, GetToponymById, GetToponymsByStreetcodeId,
};

use crate::error::AppResult;
use crate::query::ToponymParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/toponyms?title=&page=&amount=
pub async fn list_toponyms(
    State(state): State<AppState>,
    Query(params): Query<ToponymParams>,
) -> AppResult<impl IntoResponse> {
    let page = state
        .dispatcher
        .send(GetAllToponyms {
            title: params.title,
            page: params.page,
            amount: params.amount,
        })
        .await?;

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/toponyms/{id}
pub async fn get_toponym(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let toponym = state.dispatcher.send(GetToponymById { id }).await?;
    Ok(Json(DataResponse { data: toponym }))
}

/// GET /api/v1/streetcodes/{id}/toponyms
pub async fn list_streetcode_toponyms(
    State(state): State<AppState>,
    Path(streetcode_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let toponyms = state
        .dispatcher
        .send(GetToponymsByStreetcodeId { streetcode_id })
        .await?;

    Ok(Json(DataResponse { data: toponyms }))
}
