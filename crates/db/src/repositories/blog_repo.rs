//! Repository for the `blogs` table.

use chapter_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use sqlx::PgPool;

use crate::models::blog::{Blog, CreateBlog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, summary, author, url, image_url, published_on, created_at, updated_at";

/// Provides read operations for blog links, plus an insert used by
/// seeding and tests.
pub struct BlogRepo;

impl BlogRepo {
    /// Insert a new blog link, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBlog) -> Result<Blog, sqlx::Error> {
        let query = format!(
            "INSERT INTO blogs (title, summary, author, url, image_url, published_on)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.author)
            .bind(&input.url)
            .bind(&input.image_url)
            .bind(input.published_on)
            .fetch_one(pool)
            .await
    }

    /// List blog links ordered by publication date descending.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Blog>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM blogs
             ORDER BY published_on DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
