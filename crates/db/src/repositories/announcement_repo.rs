//! Repository for the `announcements` table.

use chapter_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use chapter_core::types::DbId;
use sqlx::PgPool;

use crate::models::announcement::{Announcement, CreateAnnouncement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, priority, date, image_urls, created_at, updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Insert a new announcement, returning the created row.
    ///
    /// If `priority` is `None`, defaults to `false`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (title, description, priority, date, image_urls)
             VALUES ($1, $2, COALESCE($3, false), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority)
            .bind(input.date)
            .bind(&input.image_urls)
            .fetch_one(pool)
            .await
    }

    /// Find an announcement by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements WHERE id = $1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List announcements: priority rows first, then by date descending.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Announcement>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM announcements
             ORDER BY priority DESC, date DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete an announcement by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
