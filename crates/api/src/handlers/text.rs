use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use streetcode_core::types::DbId;
use streetcode_services::requests::text::{
    GetAllTexts, GetParsedTextForAdminPreview, GetTextById, GetTextByStreetcodeId,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of the admin preview request.
#[derive(Debug, Deserialize)]
pub struct ParseTextBody {
    #[serde(default)]
    pub text: String,
}

/// GET /api/v1/texts
pub async fn list_texts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let texts = state.dispatcher.send(GetAllTexts).await?;
    Ok(Json(DataResponse { data: texts }))
}

/// GET /api/v1/texts/{id}
pub async fn get_text(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let text = state.dispatcher.send(GetTextById { id }).await?;
    Ok(Json(DataResponse { data: text }))
}

/// GET /api/v1/streetcodes/{id}/text
///
/// `data` is `null` when the streetcode exists but has no text yet.
pub async fn get_streetcode_text(
    State(state): State<AppState>,
    Path(streetcode_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let text = state
        .dispatcher
        .send(GetTextByStreetcodeId { streetcode_id })
        .await?;

    Ok(Json(DataResponse { data: text }))
}

/// POST /api/v1/texts/parse
pub async fn parse_text(
    State(state): State<AppState>,
    Json(body): Json<ParseTextBody>,
) -> AppResult<impl IntoResponse> {
    let parsed = state
        .dispatcher
        .send(GetParsedTextForAdminPreview { text: body.text })
        .await?;

    Ok(Json(DataResponse { data: parsed }))
}
