//! Upcoming-event banner entity model.

use chapter_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `upcoming_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UpcomingEvent {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub registration_link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an upcoming event (rows are managed directly in the
/// database; there is no public create endpoint).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUpcomingEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub registration_link: Option<String>,
}
