//! Repository for the `achievements` table.

use chapter_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use chapter_core::types::DbId;
use sqlx::PgPool;

use crate::models::achievement::{Achievement, CreateAchievement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, awarded_by, date, image_url, created_at, updated_at";

/// Provides CRUD operations for achievements.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Insert a new achievement, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAchievement,
    ) -> Result<Achievement, sqlx::Error> {
        let query = format!(
            "INSERT INTO achievements (title, description, awarded_by, date, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.awarded_by)
            .bind(input.date)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an achievement by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM achievements WHERE id = $1");
        sqlx::query_as::<_, Achievement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List achievements ordered by date descending.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM achievements
             ORDER BY date DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete an achievement by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
