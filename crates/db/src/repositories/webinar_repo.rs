//! Repository for the `webinars` table.

use chapter_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use chapter_core::types::DbId;
use sqlx::PgPool;

use crate::models::webinar::{CreateWebinar, Webinar};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, presenter, meeting_link, date, status, image_urls, created_at, updated_at";

/// Provides CRUD operations for webinars.
pub struct WebinarRepo;

impl WebinarRepo {
    /// Insert a new webinar, returning the created row.
    ///
    /// If `status` is `None`, defaults to `"upcoming"`.
    pub async fn create(pool: &PgPool, input: &CreateWebinar) -> Result<Webinar, sqlx::Error> {
        let query = format!(
            "INSERT INTO webinars (title, description, presenter, meeting_link, date, status, image_urls)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'upcoming'), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Webinar>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.presenter)
            .bind(&input.meeting_link)
            .bind(input.date)
            .bind(&input.status)
            .bind(&input.image_urls)
            .fetch_one(pool)
            .await
    }

    /// Find a webinar by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Webinar>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webinars WHERE id = $1");
        sqlx::query_as::<_, Webinar>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List webinars ordered by date descending.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Webinar>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM webinars
             ORDER BY date DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Webinar>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a webinar by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM webinars WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
