//! Handlers for news articles.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use streetcode_core::types::DbId;
use streetcode_services::dto::news::NewsInputDto;
use streetcode_services::requests::news::{
    CreateNews, DeleteNews, GetAllNews, GetNewsAndLinksByUrl, GetNewsById, GetNewsByUrl,
    SortedByDateTime, UpdateNews,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /api/v1/news
pub async fn list_news(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let news = state.dispatcher.send(GetAllNews).await?;
    Ok(Json(DataResponse { data: news }))
}

/// GET /api/v1/news/sorted
///
/// Newest first.
pub async fn list_news_sorted(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let news = state.dispatcher.send(SortedByDateTime).await?;
    Ok(Json(DataResponse { data: news }))
}

/// GET /api/v1/news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let news = state.dispatcher.send(GetNewsById { id }).await?;
    Ok(Json(DataResponse { data: news }))
}

/// GET /api/v1/news/url/{url}
pub async fn get_news_by_url(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> AppResult<impl IntoResponse> {
    let news = state.dispatcher.send(GetNewsByUrl { url }).await?;
    Ok(Json(DataResponse { data: news }))
}

/// GET /api/v1/news/url/{url}/links
pub async fn get_news_with_links(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> AppResult<impl IntoResponse> {
    let news = state.dispatcher.send(GetNewsAndLinksByUrl { url }).await?;
    Ok(Json(DataResponse { data: news }))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// POST /api/v1/news
pub async fn create_news(
    State(state): State<AppState>,
    Json(body): Json<NewsInputDto>,
) -> AppResult<impl IntoResponse> {
    let news = state.dispatcher.send(CreateNews { news: body }).await?;
    tracing::info!(news_id = news.id, "News created via API");
    Ok((StatusCode::CREATED, Json(DataResponse { data: news })))
}

/// PUT /api/v1/news
pub async fn update_news(
    State(state): State<AppState>,
    Json(body): Json<NewsInputDto>,
) -> AppResult<impl IntoResponse> {
    let news = state.dispatcher.send(UpdateNews { news: body }).await?;
    Ok(Json(DataResponse { data: news }))
}

/// DELETE /api/v1/news/{id}
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.dispatcher.send(DeleteNews { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
