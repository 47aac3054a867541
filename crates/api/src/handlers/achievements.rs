//! Handlers for the `/achievements` resource.
//!
//! Achievements have no storage bucket: the optional `image_url` arrives
//! as a plain text field on the form.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chapter_core::error::CoreError;
use chapter_core::types::DbId;
use chapter_db::models::achievement::{Achievement, CreateAchievement};
use chapter_db::repositories::AchievementRepo;

use crate::error::{AppError, AppResult};
use crate::multipart::ContentForm;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/achievements
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Achievement>>> {
    let rows = AchievementRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(rows))
}

/// GET /api/achievements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Achievement>> {
    let row = AchievementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Achievement",
            id,
        }))?;
    Ok(Json(row))
}

/// POST /api/achievements
///
/// Accepts a multipart form with `title`, `description`, `awarded_by`,
/// `date` (YYYY-MM-DD), and an optional `image_url` text field.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Achievement>)> {
    let form = ContentForm::collect(multipart).await?;
    let input = CreateAchievement {
        title: form.require("title")?,
        description: form.require("description")?,
        awarded_by: form.require("awarded_by")?,
        date: form.require_date("date")?,
        image_url: form.optional("image_url"),
    };

    let row = AchievementRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/achievements/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AchievementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Achievement",
            id,
        }))
    }
}
