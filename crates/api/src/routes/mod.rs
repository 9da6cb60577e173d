pub mod content;
pub mod health;
pub mod media;
pub mod news;
pub mod source;
pub mod streetcode;
pub mod tag;
pub mod term;
pub mod toponym;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /streetcodes                                     create, update (POST, PUT)
/// /streetcodes/filter                              search published streetcodes
/// /streetcodes/{id}                                get, delete
/// /streetcodes/{id}/facts                          list, create
/// /streetcodes/{id}/text                           text with term markup
/// /streetcodes/{id}/timeline-items                 list
/// /streetcodes/{id}/arts                           list
/// /streetcodes/{id}/audio                          get
/// /streetcodes/{id}/tags                           list
/// /streetcodes/{id}/toponyms                       list
/// /streetcodes/{id}/source-categories              list
/// /streetcodes/{id}/source-categories/{cat}/content  get
///
/// /facts/{id}                                      get
/// /texts                                           list
/// /texts/{id}                                      get
/// /texts/parse                                     admin preview (POST)
/// /timeline-items                                  list
/// /timeline-items/{id}                             get
/// /arts                                            list
/// /arts/{id}                                       get
///
/// /audios                                          list, create
/// /audios/{id}                                     get, delete
/// /audios/{id}/base                                raw bytes
/// /images/{id}                                     get
///
/// /source-categories                               list
/// /source-categories/names                         list names
/// /source-categories/{id}                          get
///
/// /toponyms                                        paged list (?title&page&amount)
/// /toponyms/{id}                                   get
///
/// /terms                                           list
/// /terms/{id}/related-terms                        list
/// /related-terms                                   create (POST)
/// /related-terms/{word}                            delete
///
/// /tags                                            list
///
/// /news                                            list, create, update
/// /news/sorted                                     newest first
/// /news/{id}                                       get, delete
/// /news/url/{url}                                  get
/// /news/url/{url}/links                            get with prev/next/random
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Streetcode pages and everything hanging off a single streetcode.
        .nest("/streetcodes", streetcode::router())
        // Content blocks addressed by their own id.
        .nest("/facts", content::facts_router())
        .nest("/texts", content::texts_router())
        .nest("/timeline-items", content::timeline_router())
        .nest("/arts", content::arts_router())
        // Media.
        .nest("/audios", media::audios_router())
        .nest("/images", media::images_router())
        // Sources.
        .nest("/source-categories", source::router())
        // Toponyms.
        .nest("/toponyms", toponym::router())
        // Glossary.
        .nest("/terms", term::terms_router())
        .nest("/related-terms", term::related_router())
        // Tags.
        .nest("/tags", tag::router())
        // News.
        .nest("/news", news::router())
}
