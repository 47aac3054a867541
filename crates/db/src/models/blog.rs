//! Blog link entity model.

use chapter_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `blogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Blog {
    pub id: DbId,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub published_on: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a blog link (rows are managed directly in the
/// database; there is no public create endpoint).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlog {
    pub title: String,
    pub summary: String,
    pub author: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub published_on: NaiveDate,
}
