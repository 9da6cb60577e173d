//! Handlers for audio files.
//!
//! Metadata endpoints return the usual `{ "data": ... }` envelope with a
//! base64 payload; `/audios/{id}/base` streams the raw bytes instead.

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::types::DbId;
use streetcode_services::dto::media::AudioFileCreateDto;
use streetcode_services::requests::audio::{
    CreateAudio, DeleteAudio, GetAllAudios, GetAudioById, GetAudioByStreetcodeId, GetBaseAudio,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/audios
pub async fn list_audios(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let audios = state.dispatcher.send(GetAllAudios).await?;
    Ok(Json(DataResponse { data: audios }))
}

/// GET /api/v1/audios/{id}
pub async fn get_audio(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let audio = state.dispatcher.send(GetAudioById { id }).await?;
    Ok(Json(DataResponse { data: audio }))
}

/// GET /api/v1/audios/{id}/base
pub async fn get_base_audio(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let payload = state.dispatcher.send(GetBaseAudio { id }).await?;
    Ok(([(CONTENT_TYPE, payload.mime_type)], payload.bytes))
}

/// GET /api/v1/streetcodes/{id}/audio
pub async fn get_streetcode_audio(
    State(state): State<AppState>,
    Path(streetcode_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let audio = state
        .dispatcher
        .send(GetAudioByStreetcodeId { streetcode_id })
        .await?;

    Ok(Json(DataResponse { data: audio }))
}

/// POST /api/v1/audios
pub async fn create_audio(
    State(state): State<AppState>,
    Json(body): Json<AudioFileCreateDto>,
) -> AppResult<impl IntoResponse> {
    let audio = state.dispatcher.send(CreateAudio { audio: body }).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: audio })))
}

/// DELETE /api/v1/audios/{id}
pub async fn delete_audio(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.dispatcher.send(DeleteAudio { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
