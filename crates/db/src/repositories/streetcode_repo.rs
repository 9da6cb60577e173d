//! Repository for the `streetcodes` table and its tag and image links.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use streetcode_core::streetcode::StreetcodeStatus;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::streetcode::{Streetcode, StreetcodeInput};

/// Column list for `streetcodes` queries.
const COLUMNS: &str = "\
    id, index, type_id, title, first_name, last_name, alias, \
    transliteration_url, teaser, date_string, \
    event_start_or_person_birth_date, event_end_or_person_death_date, \
    status_id, view_count, audio_id, created_at, updated_at";

#[async_trait]
pub trait StreetcodeRepository: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Streetcode>>;

    async fn find_by_index(&self, index: i32) -> RepoResult<Option<Streetcode>>;

    /// All published streetcodes, ordered by index.
    async fn list_published(&self) -> RepoResult<Vec<Streetcode>>;

    /// Published streetcodes whose title, alias or teaser contains `query`
    /// (case-sensitive). An empty query matches every published streetcode.
    async fn search_published(&self, query: &str) -> RepoResult<Vec<Streetcode>>;

    /// Insert a streetcode together with its tag links and image details.
    async fn create(&self, input: &StreetcodeInput) -> RepoResult<Streetcode>;

    /// Replace a streetcode's fields, tag links and image details.
    ///
    /// Returns `None` if no streetcode with the given ID exists.
    async fn update(&self, id: DbId, input: &StreetcodeInput) -> RepoResult<Option<Streetcode>>;

    /// Delete a streetcode. Returns the number of rows removed.
    async fn delete(&self, id: DbId) -> RepoResult<u64>;
}

/// PostgreSQL implementation of [`StreetcodeRepository`].
#[derive(Clone)]
pub struct PgStreetcodeRepo {
    pool: PgPool,
}

impl PgStreetcodeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StreetcodeRepository for PgStreetcodeRepo {
    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Streetcode>> {
        let query = format!("SELECT {COLUMNS} FROM streetcodes WHERE id = $1");
        sqlx::query_as::<_, Streetcode>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_index(&self, index: i32) -> RepoResult<Option<Streetcode>> {
        let query = format!("SELECT {COLUMNS} FROM streetcodes WHERE index = $1");
        sqlx::query_as::<_, Streetcode>(&query)
            .bind(index)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_published(&self) -> RepoResult<Vec<Streetcode>> {
        let query = format!(
            "SELECT {COLUMNS} FROM streetcodes WHERE status_id = $1 ORDER BY index"
        );
        sqlx::query_as::<_, Streetcode>(&query)
            .bind(StreetcodeStatus::Published.id())
            .fetch_all(&self.pool)
            .await
    }

    async fn search_published(&self, query_text: &str) -> RepoResult<Vec<Streetcode>> {
        // strpos() keeps the match literal; LIKE would treat % and _ as wildcards.
        let query = format!(
            "SELECT {COLUMNS} FROM streetcodes \
             WHERE status_id = $1 \
               AND (strpos(title, $2) > 0 \
                    OR strpos(COALESCE(alias, ''), $2) > 0 \
                    OR strpos(COALESCE(teaser, ''), $2) > 0) \
             ORDER BY index"
        );
        sqlx::query_as::<_, Streetcode>(&query)
            .bind(StreetcodeStatus::Published.id())
            .bind(query_text)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, input: &StreetcodeInput) -> RepoResult<Streetcode> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO streetcodes \
                (index, type_id, title, first_name, last_name, alias, \
                 transliteration_url, teaser, date_string, \
                 event_start_or_person_birth_date, event_end_or_person_death_date, \
                 status_id, view_count, audio_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        let streetcode = sqlx::query_as::<_, Streetcode>(&query)
            .bind(input.index)
            .bind(input.streetcode_type.id())
            .bind(&input.title)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.alias)
            .bind(&input.transliteration_url)
            .bind(&input.teaser)
            .bind(&input.date_string)
            .bind(input.event_start_or_person_birth_date)
            .bind(input.event_end_or_person_death_date)
            .bind(input.status.id())
            .bind(input.view_count)
            .bind(input.audio_id)
            .fetch_one(&mut *tx)
            .await?;

        write_links(&mut tx, streetcode.id, input).await?;

        tx.commit().await?;
        Ok(streetcode)
    }

    async fn update(&self, id: DbId, input: &StreetcodeInput) -> RepoResult<Option<Streetcode>> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "UPDATE streetcodes SET \
                index = $2, type_id = $3, title = $4, first_name = $5, \
                last_name = $6, alias = $7, transliteration_url = $8, \
                teaser = $9, date_string = $10, \
                event_start_or_person_birth_date = $11, \
                event_end_or_person_death_date = $12, \
                status_id = $13, audio_id = $14, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Streetcode>(&query)
            .bind(id)
            .bind(input.index)
            .bind(input.streetcode_type.id())
            .bind(&input.title)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.alias)
            .bind(&input.transliteration_url)
            .bind(&input.teaser)
            .bind(&input.date_string)
            .bind(input.event_start_or_person_birth_date)
            .bind(input.event_end_or_person_death_date)
            .bind(input.status.id())
            .bind(input.audio_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(streetcode) = updated else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM streetcode_tag_index WHERE streetcode_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM streetcode_images WHERE streetcode_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM image_details WHERE image_id = ANY($1)")
            .bind(input.image_ids())
            .execute(&mut *tx)
            .await?;

        write_links(&mut tx, id, input).await?;

        tx.commit().await?;
        Ok(Some(streetcode))
    }

    async fn delete(&self, id: DbId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM streetcodes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Insert tag links, image details and image links for a streetcode.
async fn write_links(
    tx: &mut Transaction<'_, Postgres>,
    streetcode_id: DbId,
    input: &StreetcodeInput,
) -> RepoResult<()> {
    for tag in &input.tags {
        let tag_id = match tag.tag_id {
            Some(id) => id,
            None => {
                sqlx::query_scalar::<_, DbId>(
                    "INSERT INTO tags (title) VALUES ($1) \
                     ON CONFLICT (title) DO UPDATE SET title = EXCLUDED.title \
                     RETURNING id",
                )
                .bind(&tag.title)
                .fetch_one(&mut **tx)
                .await?
            }
        };

        sqlx::query(
            "INSERT INTO streetcode_tag_index (streetcode_id, tag_id, is_visible, index) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (streetcode_id, tag_id) \
             DO UPDATE SET is_visible = EXCLUDED.is_visible, index = EXCLUDED.index",
        )
        .bind(streetcode_id)
        .bind(tag_id)
        .bind(tag.is_visible)
        .bind(tag.index)
        .execute(&mut **tx)
        .await?;
    }

    for detail in &input.image_details {
        sqlx::query("INSERT INTO image_details (image_id, title, alt) VALUES ($1, $2, $3)")
            .bind(detail.image_id)
            .bind(&detail.title)
            .bind(&detail.alt)
            .execute(&mut **tx)
            .await?;
    }

    for image_id in input.image_ids() {
        sqlx::query(
            "INSERT INTO streetcode_images (streetcode_id, image_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(streetcode_id)
        .bind(image_id)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}
