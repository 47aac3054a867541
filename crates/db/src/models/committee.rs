//! Committee roster entity model.

use chapter_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `committee_images` table: one committee member's
/// portrait for a given chapter year (e.g. `"2024-25"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommitteeImage {
    pub id: DbId,
    pub year: String,
    pub member_name: String,
    pub position: String,
    pub image_url: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a committee member (rows are managed directly in
/// the database; there is no public create endpoint).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommitteeImage {
    pub year: String,
    pub member_name: String,
    pub position: String,
    pub image_url: String,
    /// Defaults to `0` if omitted.
    pub sort_order: Option<i32>,
}
