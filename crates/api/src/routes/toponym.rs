use axum::routing::get;
use axum::Router;

use crate::handlers::toponym;
use crate::state::AppState;

/// Toponym routes mounted at `/toponyms`.
///
/// ```text
/// GET    /?title=&page=&amount=   -> list_toponyms
/// GET    /{id}                    -> get_toponym
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(toponym::list_toponyms))
        .route("/{id}", get(toponym::get_toponym))
}
