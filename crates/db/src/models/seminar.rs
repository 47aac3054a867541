//! Seminar entity model and DTOs.

use chapter_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `seminars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Seminar {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub speaker: Option<String>,
    pub date: NaiveDate,
    pub status: String,
    pub image_urls: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new seminar.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSeminar {
    pub title: String,
    pub description: String,
    pub speaker: Option<String>,
    pub date: NaiveDate,
    /// Defaults to `"upcoming"` if omitted.
    pub status: Option<String>,
    pub image_urls: Vec<String>,
}
