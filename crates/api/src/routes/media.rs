//! Route definitions for stored media.

use axum::routing::get;
use axum::Router;

use crate::handlers::{audio, image};
use crate::state::AppState;

/// Audio routes mounted at `/audios`.
///
/// ```text
/// GET    /                  -> list_audios
/// POST   /                  -> create_audio
/// GET    /{id}              -> get_audio
/// DELETE /{id}              -> delete_audio
/// GET    /{id}/base         -> get_base_audio (raw bytes)
/// ```
pub fn audios_router() -> Router<AppState> {
    Router::new()
        .route("/", get(audio::list_audios).post(audio::create_audio))
        .route("/{id}", get(audio::get_audio).delete(audio::delete_audio))
        .route("/{id}/base", get(audio::get_base_audio))
}

/// Image routes mounted at `/images`.
///
/// ```text
/// GET    /{id}              -> get_image
/// ```
pub fn images_router() -> Router<AppState> {
    Router::new().route("/{id}", get(image::get_image))
}
