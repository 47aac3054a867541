//! Social event entity model and DTOs.

use chapter_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: String,
    pub image_urls: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Defaults to `"upcoming"` if omitted.
    pub status: Option<String>,
    pub image_urls: Vec<String>,
}
