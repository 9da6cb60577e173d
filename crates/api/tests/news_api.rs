//! Integration tests for the news endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, TestApp};
use serde_json::{json, Value};

fn news_body(title: &str, url: &str, day: u32) -> Value {
    json!({
        "title": title,
        "text": format!("{title} text"),
        "url": url,
        "creationDate": format!("2024-03-{day:02}T10:00:00Z")
    })
}

async fn create_news(app: &TestApp, title: &str, url: &str, day: u32) -> i64 {
    let response = post_json(app, "/api/v1/news", news_body(title, url, day)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: create, fetch by id and url, update, delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn news_crud_round() {
    let app = common::build_test_app();
    let id = create_news(&app, "Opening", "opening", 1).await;

    let response = get(&app, &format!("/api/v1/news/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["url"], "opening");

    let response = get(&app, "/api/v1/news/url/opening").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], id);

    let mut body = news_body("Grand opening", "opening", 1);
    body["id"] = json!(id);
    let response = put_json(&app, "/api/v1/news", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["title"], "Grand opening");

    let response = delete(&app, &format!("/api/v1/news/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/news/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("No news by entered Id - {id}")
    );
}

// ---------------------------------------------------------------------------
// Test: invalid bodies are rejected before any write
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_news_is_rejected_with_all_messages() {
    let app = common::build_test_app();

    let response = post_json(
        &app,
        "/api/v1/news",
        json!({ "title": "A", "text": "", "url": "Not A Slug" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let messages: Vec<&str> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["message"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"Title must be at least 2 characters long."));
    assert!(messages.contains(&"Text content is required."));
    assert!(messages.contains(&"URL must be in a valid format."));
    assert!(messages.contains(&"Creation date is required."));

    let response = get(&app, "/api/v1/news").await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: sorted listing and navigation links
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sorted_lists_newest_first() {
    let app = common::build_test_app();
    create_news(&app, "First", "first", 1).await;
    create_news(&app, "Third", "third", 3).await;
    create_news(&app, "Second", "second", 2).await;

    let response = get(&app, "/api/v1/news/sorted").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let urls: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["url"].as_str().unwrap())
        .collect();
    assert_eq!(urls, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn links_point_to_neighbours() {
    let app = common::build_test_app();
    create_news(&app, "First", "first", 1).await;
    create_news(&app, "Second", "second", 2).await;
    create_news(&app, "Third", "third", 3).await;

    let response = get(&app, "/api/v1/news/url/second/links").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["news"]["url"], "second");
    assert_eq!(json["data"]["prevNewsUrl"], "first");
    assert_eq!(json["data"]["nextNewsUrl"], "third");
    // Too few articles for a distinct suggestion.
    assert_eq!(json["data"]["randomNews"]["url"], "second");

    let response = get(&app, "/api/v1/news/url/first/links").await;
    let json = body_json(response).await;
    assert!(json["data"]["prevNewsUrl"].is_null());
}

#[tokio::test]
async fn unknown_url_returns_404() {
    let app = common::build_test_app();

    let response = get(&app, "/api/v1/news/url/missing/links").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "No news by entered Url - missing"
    );
}

// ---------------------------------------------------------------------------
// Test: a lost image blob does not take down the feed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn feed_is_served_when_an_image_blob_is_missing() {
    let app = common::build_test_app();
    let image_id = streetcode_db::repositories::ImageRepository::create(
        &app.repos,
        &streetcode_db::models::image::NewImage {
            blob_name: "lost.png".into(),
            mime_type: "image/png".into(),
        },
    )
    .await
    .unwrap()
    .id;

    let mut body = news_body("Opening", "opening", 1);
    body["imageId"] = json!(image_id);
    let response = post_json(&app, "/api/v1/news", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    create_news(&app, "Closing", "closing", 2).await;

    let response = get(&app, "/api/v1/news").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let feed = json["data"].as_array().unwrap();
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0]["image"]["id"], image_id);
    assert!(feed[0]["image"]["base64"].is_null());
}
