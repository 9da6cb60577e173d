//! Route definitions for the content blocks of a streetcode page.
//!
//! Several routers are provided, one per block:
//! - `facts_router()` mounted at `/facts`
//! - `texts_router()` mounted at `/texts`
//! - `timeline_router()` mounted at `/timeline-items`
//! - `arts_router()` mounted at `/arts`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{art, fact, text, timeline};
use crate::state::AppState;

/// ```text
/// GET    /{id}              -> get_fact
/// ```
pub fn facts_router() -> Router<AppState> {
    Router::new().route("/{id}", get(fact::get_fact))
}

/// ```text
/// GET    /                  -> list_texts
/// POST   /parse             -> parse_text
/// GET    /{id}              -> get_text
/// ```
pub fn texts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(text::list_texts))
        .route("/parse", post(text::parse_text))
        .route("/{id}", get(text::get_text))
}

/// ```text
/// GET    /                  -> list_timeline_items
/// GET    /{id}              -> get_timeline_item
/// ```
pub fn timeline_router() -> Router<AppState> {
    Router::new()
        .route("/", get(timeline::list_timeline_items))
        .route("/{id}", get(timeline::get_timeline_item))
}

/// ```text
/// GET    /                  -> list_arts
/// GET    /{id}              -> get_art
/// ```
pub fn arts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(art::list_arts))
        .route("/{id}", get(art::get_art))
}
