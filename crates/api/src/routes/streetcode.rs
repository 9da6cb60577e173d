//! Route definitions for streetcodes and their per-streetcode sub-resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{art, audio, fact, source, streetcode, tag, text, timeline, toponym};
use crate::state::AppState;

/// Routes mounted at `/streetcodes`.
///
/// ```text
/// POST   /                                         -> create_streetcode
/// PUT    /                                         -> update_streetcode
/// GET    /filter?searchQuery=                      -> filter_streetcodes
/// GET    /{id}                                     -> get_streetcode
/// DELETE /{id}                                     -> delete_streetcode
/// GET    /{id}/facts                               -> list_streetcode_facts
/// POST   /{id}/facts                               -> create_fact
/// GET    /{id}/text                                -> get_streetcode_text
/// GET    /{id}/timeline-items                      -> list_streetcode_timeline_items
/// GET    /{id}/arts                                -> list_streetcode_arts
/// GET    /{id}/audio                               -> get_streetcode_audio
/// GET    /{id}/tags                                -> list_streetcode_tags
/// GET    /{id}/toponyms                            -> list_streetcode_toponyms
/// GET    /{id}/source-categories                   -> list_streetcode_categories
/// GET    /{id}/source-categories/{category_id}/content -> get_category_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(streetcode::create_streetcode).put(streetcode::update_streetcode),
        )
        .route("/filter", get(streetcode::filter_streetcodes))
        .route(
            "/{id}",
            get(streetcode::get_streetcode).delete(streetcode::delete_streetcode),
        )
        .route(
            "/{id}/facts",
            get(fact::list_streetcode_facts).post(fact::create_fact),
        )
        .route("/{id}/text", get(text::get_streetcode_text))
        .route(
            "/{id}/timeline-items",
            get(timeline::list_streetcode_timeline_items),
        )
        .route("/{id}/arts", get(art::list_streetcode_arts))
        .route("/{id}/audio", get(audio::get_streetcode_audio))
        .route("/{id}/tags", get(tag::list_streetcode_tags))
        .route("/{id}/toponyms", get(toponym::list_streetcode_toponyms))
        .route(
            "/{id}/source-categories",
            get(source::list_streetcode_categories),
        )
        .route(
            "/{id}/source-categories/{category_id}/content",
            get(source::get_category_content),
        )
}
