use axum::routing::get;
use axum::Router;

use crate::handlers::tag;
use crate::state::AppState;

/// Tag routes mounted at `/tags`.
///
/// ```text
/// GET    /                  -> list_tags
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(tag::list_tags))
}
