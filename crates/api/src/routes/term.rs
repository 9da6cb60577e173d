//! Route definitions for the glossary.
//!
//! Two routers are provided:
//! - `terms_router()` mounted at `/terms`
//! - `related_router()` mounted at `/related-terms`

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::term;
use crate::state::AppState;

/// ```text
/// GET    /                        -> list_terms
/// GET    /{id}/related-terms      -> list_related_terms
/// ```
pub fn terms_router() -> Router<AppState> {
    Router::new()
        .route("/", get(term::list_terms))
        .route("/{id}/related-terms", get(term::list_related_terms))
}

/// ```text
/// POST   /                  -> create_related_term
/// DELETE /{word}            -> delete_related_term
/// ```
pub fn related_router() -> Router<AppState> {
    Router::new()
        .route("/", post(term::create_related_term))
        .route("/{word}", delete(term::delete_related_term))
}
