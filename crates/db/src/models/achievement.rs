//! Achievement entity model and DTOs.

use chapter_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `achievements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub awarded_by: String,
    pub date: NaiveDate,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new achievement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAchievement {
    pub title: String,
    pub description: String,
    pub awarded_by: String,
    pub date: NaiveDate,
    pub image_url: Option<String>,
}
