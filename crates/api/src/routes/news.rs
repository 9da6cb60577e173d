//! Route definitions for news articles.

use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// News routes mounted at `/news`.
///
/// ```text
/// GET    /                  -> list_news
/// POST   /                  -> create_news
/// PUT    /                  -> update_news
/// GET    /sorted            -> list_news_sorted
/// GET    /{id}              -> get_news
/// DELETE /{id}              -> delete_news
/// GET    /url/{url}         -> get_news_by_url
/// GET    /url/{url}/links   -> get_news_with_links
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(news::list_news)
                .post(news::create_news)
                .put(news::update_news),
        )
        .route("/sorted", get(news::list_news_sorted))
        .route("/{id}", get(news::get_news).delete(news::delete_news))
        .route("/url/{url}", get(news::get_news_by_url))
        .route("/url/{url}/links", get(news::get_news_with_links))
}
