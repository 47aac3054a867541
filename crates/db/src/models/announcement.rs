//! Announcement entity model and DTOs.

use chapter_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `announcements` table.
///
/// Priority announcements sort ahead of the rest regardless of date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub priority: bool,
    pub date: NaiveDate,
    pub image_urls: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new announcement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnouncement {
    pub title: String,
    pub description: String,
    /// Defaults to `false` if omitted.
    pub priority: Option<bool>,
    pub date: NaiveDate,
    pub image_urls: Vec<String>,
}
