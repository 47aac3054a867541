//! Repository for the `committee_images` table.

use sqlx::PgPool;

use crate::models::committee::{CommitteeImage, CreateCommitteeImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, year, member_name, position, image_url, sort_order, created_at, updated_at";

/// Provides read operations for committee rosters, plus an insert used
/// by seeding and tests.
pub struct CommitteeRepo;

impl CommitteeRepo {
    /// Insert a new committee member, returning the created row.
    ///
    /// If `sort_order` is `None`, defaults to `0`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommitteeImage,
    ) -> Result<CommitteeImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO committee_images (year, member_name, position, image_url, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommitteeImage>(&query)
            .bind(&input.year)
            .bind(&input.member_name)
            .bind(&input.position)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List committee members, optionally restricted to a chapter year.
    ///
    /// Ordered by roster position within a year; unfiltered listings put
    /// the newest year first.
    pub async fn list(
        pool: &PgPool,
        year: Option<&str>,
    ) -> Result<Vec<CommitteeImage>, sqlx::Error> {
        match year {
            Some(year) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM committee_images
                     WHERE year = $1
                     ORDER BY sort_order ASC, id ASC"
                );
                sqlx::query_as::<_, CommitteeImage>(&query)
                    .bind(year)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM committee_images
                     ORDER BY year DESC, sort_order ASC, id ASC"
                );
                sqlx::query_as::<_, CommitteeImage>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// List the distinct chapter years with a roster, newest first.
    pub async fn list_years(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT year FROM committee_images ORDER BY year DESC")
            .fetch_all(pool)
            .await
    }
}
