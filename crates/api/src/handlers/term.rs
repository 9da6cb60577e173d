use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::types::DbId;
use streetcode_services::dto::term::RelatedTermDto;
use streetcode_services::requests::term::{
    CreateRelatedTerm, DeleteRelatedTerm, GetAllRelatedTermsByTermId, GetAllTerms,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/terms
pub async fn list_terms(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let terms = state.dispatcher.send(GetAllTerms).await?;
    Ok(Json(DataResponse { data: terms }))
}

/// GET /api/v1/terms/{id}/related-terms
pub async fn list_related_terms(
    State(state): State<AppState>,
    Path(term_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let related = state
        .dispatcher
        .send(GetAllRelatedTermsByTermId { term_id })
        .await?;

    Ok(Json(DataResponse { data: related }))
}

/// POST /api/v1/related-terms
pub async fn create_related_term(
    State(state): State<AppState>,
    Json(body): Json<RelatedTermDto>,
) -> AppResult<impl IntoResponse> {
    let created = state
        .dispatcher
        .send(CreateRelatedTerm { related: body })
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// DELETE /api/v1/related-terms/{word}
///
/// Answers with the deleted row rather than 204 so clients can update their
/// lists without a refetch.
pub async fn delete_related_term(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.dispatcher.send(DeleteRelatedTerm { word }).await?;
    Ok(Json(DataResponse { data: deleted }))
}
