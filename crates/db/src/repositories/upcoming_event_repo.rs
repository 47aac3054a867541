//! Repository for the `upcoming_events` table.

use chapter_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use chapter_core::types::DbId;
use sqlx::PgPool;

use crate::models::upcoming_event::{CreateUpcomingEvent, UpcomingEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, date, registration_link, created_at, updated_at";

/// Provides read operations for the upcoming-events banner, plus an
/// insert used by seeding and tests.
pub struct UpcomingEventRepo;

impl UpcomingEventRepo {
    /// Insert a new upcoming event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUpcomingEvent,
    ) -> Result<UpcomingEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO upcoming_events (title, description, date, registration_link)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UpcomingEvent>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.date)
            .bind(&input.registration_link)
            .fetch_one(pool)
            .await
    }

    /// Find an upcoming event by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UpcomingEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM upcoming_events WHERE id = $1");
        sqlx::query_as::<_, UpcomingEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List upcoming events soonest-first.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<UpcomingEvent>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM upcoming_events
             ORDER BY date ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, UpcomingEvent>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
