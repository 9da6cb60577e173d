use axum::routing::get;
use axum::Router;

use crate::handlers::source;
use crate::state::AppState;

/// Source category routes mounted at `/source-categories`.
///
/// ```text
/// GET    /                  -> list_categories
/// GET    /names             -> list_category_names
/// GET    /{id}              -> get_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(source::list_categories))
        .route("/names", get(source::list_category_names))
        .route("/{id}", get(source::get_category))
}
