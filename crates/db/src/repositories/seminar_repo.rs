//! Repository for the `seminars` table.

use chapter_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use chapter_core::types::DbId;
use sqlx::PgPool;

use crate::models::seminar::{CreateSeminar, Seminar};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, speaker, date, status, image_urls, created_at, updated_at";

/// Provides CRUD operations for seminars.
pub struct SeminarRepo;

impl SeminarRepo {
    /// Insert a new seminar, returning the created row.
    ///
    /// If `status` is `None`, defaults to `"upcoming"`.
    pub async fn create(pool: &PgPool, input: &CreateSeminar) -> Result<Seminar, sqlx::Error> {
        let query = format!(
            "INSERT INTO seminars (title, description, speaker, date, status, image_urls)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'upcoming'), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Seminar>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.speaker)
            .bind(input.date)
            .bind(&input.status)
            .bind(&input.image_urls)
            .fetch_one(pool)
            .await
    }

    /// Find a seminar by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Seminar>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seminars WHERE id = $1");
        sqlx::query_as::<_, Seminar>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List seminars ordered by date descending.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Seminar>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM seminars
             ORDER BY date DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Seminar>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a seminar by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM seminars WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
