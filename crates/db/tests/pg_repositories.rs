//! PostgreSQL repository tests. Each test gets a fresh database with the
//! workspace migrations applied.

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use streetcode_core::streetcode::{StreetcodeStatus, StreetcodeType};
use streetcode_core::types::{DbId, Timestamp};
use streetcode_db::models::image::{NewImage, NewImageDetails};
use streetcode_db::models::news::NewsInput;
use streetcode_db::models::streetcode::StreetcodeInput;
use streetcode_db::models::tag::TagLink;
use streetcode_db::repositories::{
    ImageRepository, NewsRepository, PgImageRepo, PgNewsRepo, PgStreetcodeRepo, PgTagRepo,
    StreetcodeRepository, TagRepository,
};

fn streetcode(index: i32, title: &str, status: StreetcodeStatus) -> StreetcodeInput {
    StreetcodeInput {
        index,
        streetcode_type: StreetcodeType::Person,
        title: title.into(),
        first_name: None,
        last_name: None,
        alias: None,
        transliteration_url: format!("sc-{index}"),
        teaser: Some("Teaser".into()),
        date_string: "1856".into(),
        event_start_or_person_birth_date: Utc::now(),
        event_end_or_person_death_date: None,
        status,
        view_count: 0,
        audio_id: None,
        tags: vec![],
        image_details: vec![],
    }
}

fn tag(title: &str, index: i32) -> TagLink {
    TagLink {
        tag_id: None,
        title: title.into(),
        is_visible: true,
        index,
    }
}

fn day(d: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap()
}

fn news(title: &str, url: &str, creation_date: Timestamp) -> NewsInput {
    NewsInput {
        title: title.into(),
        text: "Body".into(),
        url: url.into(),
        image_id: None,
        creation_date,
    }
}

async fn image(pool: &PgPool, blob_name: &str) -> DbId {
    PgImageRepo::new(pool.clone())
        .create(&NewImage {
            blob_name: blob_name.into(),
            mime_type: "image/png".into(),
        })
        .await
        .unwrap()
        .id
}

// ---------------------------------------------------------------------------
// Test: search_published
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_with_empty_query_returns_every_published_streetcode(pool: PgPool) {
    let repo = PgStreetcodeRepo::new(pool);
    repo.create(&streetcode(2, "Lesya Ukrainka", StreetcodeStatus::Published))
        .await
        .unwrap();
    repo.create(&streetcode(1, "Ivan Franko", StreetcodeStatus::Published))
        .await
        .unwrap();
    repo.create(&streetcode(3, "Draft person", StreetcodeStatus::Draft))
        .await
        .unwrap();

    let found = repo.search_published("").await.unwrap();
    let titles: Vec<_> = found.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(titles, vec!["Ivan Franko", "Lesya Ukrainka"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_sensitive(pool: PgPool) {
    let repo = PgStreetcodeRepo::new(pool);
    repo.create(&streetcode(1, "Ivan Franko", StreetcodeStatus::Published))
        .await
        .unwrap();

    assert_eq!(repo.search_published("Ivan").await.unwrap().len(), 1);
    assert!(repo.search_published("ivan").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_skips_unpublished_rows(pool: PgPool) {
    let repo = PgStreetcodeRepo::new(pool);
    repo.create(&streetcode(1, "Ivan Franko", StreetcodeStatus::Draft))
        .await
        .unwrap();
    repo.create(&streetcode(2, "Ivan Mazepa", StreetcodeStatus::Deleted))
        .await
        .unwrap();
    repo.create(&streetcode(3, "Ivan Kotliarevsky", StreetcodeStatus::Published))
        .await
        .unwrap();

    let found = repo.search_published("Ivan").await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].index, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_treats_like_wildcards_literally(pool: PgPool) {
    let repo = PgStreetcodeRepo::new(pool);
    repo.create(&streetcode(1, "Ivan Franko", StreetcodeStatus::Published))
        .await
        .unwrap();

    assert!(repo.search_published("%").await.unwrap().is_empty());
    assert!(repo.search_published("I_an").await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: streetcode create/update link replacement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_writes_tag_and_image_links(pool: PgPool) {
    let portrait = image(&pool, "portrait.png").await;
    let repo = PgStreetcodeRepo::new(pool.clone());

    let mut input = streetcode(1, "Ivan Franko", StreetcodeStatus::Published);
    input.tags = vec![tag("Writers", 0), tag("Lviv", 1)];
    input.image_details = vec![NewImageDetails {
        image_id: portrait,
        title: Some("Portrait".into()),
        alt: Some("0".into()),
    }];
    let created = repo.create(&input).await.unwrap();

    let tags = PgTagRepo::new(pool.clone())
        .list_by_streetcode(created.id)
        .await
        .unwrap();
    let titles: Vec<_> = tags.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Writers", "Lviv"]);

    let images = PgImageRepo::new(pool.clone());
    let linked = images.list_by_streetcode(created.id).await.unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, portrait);

    let details = images.list_details_by_streetcode(created.id).await.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].title.as_deref(), Some("Portrait"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_tag_and_image_links(pool: PgPool) {
    let first = image(&pool, "first.png").await;
    let second = image(&pool, "second.png").await;
    let repo = PgStreetcodeRepo::new(pool.clone());

    let mut input = streetcode(1, "Ivan Franko", StreetcodeStatus::Published);
    input.tags = vec![tag("Writers", 0), tag("Lviv", 1)];
    input.image_details = vec![NewImageDetails {
        image_id: first,
        title: Some("Old".into()),
        alt: Some("0".into()),
    }];
    let created = repo.create(&input).await.unwrap();

    input.title = "Ivan Yakovych Franko".into();
    input.tags = vec![tag("Poets", 0)];
    input.image_details = vec![NewImageDetails {
        image_id: second,
        title: Some("New".into()),
        alt: Some("1".into()),
    }];
    let updated = repo.update(created.id, &input).await.unwrap().unwrap();
    assert_eq!(updated.title, "Ivan Yakovych Franko");

    let tags = PgTagRepo::new(pool.clone())
        .list_by_streetcode(created.id)
        .await
        .unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].title, "Poets");

    let images = PgImageRepo::new(pool.clone());
    let linked = images.list_by_streetcode(created.id).await.unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, second);

    let details = images.list_details_by_streetcode(created.id).await.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].title.as_deref(), Some("New"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_missing_streetcode_returns_none(pool: PgPool) {
    let repo = PgStreetcodeRepo::new(pool);
    let input = streetcode(1, "Ivan Franko", StreetcodeStatus::Published);

    assert!(repo.update(999_999, &input).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tags_without_id_reuse_existing_title(pool: PgPool) {
    let repo = PgStreetcodeRepo::new(pool.clone());

    let mut a = streetcode(1, "Ivan Franko", StreetcodeStatus::Published);
    a.tags = vec![tag("Writers", 0)];
    let mut b = streetcode(2, "Lesya Ukrainka", StreetcodeStatus::Published);
    b.tags = vec![tag("Writers", 0)];
    repo.create(&a).await.unwrap();
    repo.create(&b).await.unwrap();

    let all = PgTagRepo::new(pool).list_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: NewsRepository::list_all
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn news_list_all_is_oldest_first(pool: PgPool) {
    let repo = PgNewsRepo::new(pool);
    repo.create(&news("Third", "third", day(3))).await.unwrap();
    repo.create(&news("First", "first", day(1))).await.unwrap();
    repo.create(&news("Second", "second", day(2))).await.unwrap();

    let all = repo.list_all().await.unwrap();
    let titles: Vec<_> = all.iter().map(|n| n.title.as_str()).collect();

    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn news_with_equal_dates_keep_insertion_order(pool: PgPool) {
    let repo = PgNewsRepo::new(pool);
    repo.create(&news("Alpha", "alpha", day(5))).await.unwrap();
    repo.create(&news("Beta", "beta", day(5))).await.unwrap();

    let all = repo.list_all().await.unwrap();
    let titles: Vec<_> = all.iter().map(|n| n.title.as_str()).collect();

    assert_eq!(titles, vec!["Alpha", "Beta"]);
}
