//! Handlers for the `/announcements` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chapter_core::error::CoreError;
use chapter_core::types::DbId;
use chapter_db::models::announcement::{Announcement, CreateAnnouncement};
use chapter_db::repositories::AnnouncementRepo;
use chapter_storage::buckets;

use crate::error::{AppError, AppResult};
use crate::multipart::ContentForm;
use crate::query::PaginationParams;
use crate::state::AppState;
use crate::upload::{remove_objects, rollback_uploads, upload_images, urls};

/// GET /api/announcements
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Announcement>>> {
    let rows = AnnouncementRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(rows))
}

/// GET /api/announcements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let row = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;
    Ok(Json(row))
}

/// POST /api/announcements
///
/// Accepts a multipart form with `title`, `description`, `date`
/// (YYYY-MM-DD), an optional `priority` flag, and zero or more `images`
/// file parts uploaded to the `announcement` bucket.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    let form = ContentForm::collect(multipart).await?;
    let title = form.require("title")?;
    let description = form.require("description")?;
    let date = form.require_date("date")?;
    let priority = form.optional_flag("priority");

    let uploaded = upload_images(&state.storage, buckets::ANNOUNCEMENT, form.files()).await?;
    let input = CreateAnnouncement {
        title,
        description,
        priority,
        date,
        image_urls: urls(&uploaded),
    };

    match AnnouncementRepo::create(&state.pool, &input).await {
        Ok(row) => Ok((StatusCode::CREATED, Json(row))),
        Err(err) => {
            rollback_uploads(&state.storage, buckets::ANNOUNCEMENT, &uploaded).await;
            Err(err.into())
        }
    }
}

/// DELETE /api/announcements/{id}
///
/// Removes the row, then best-effort deletes the uploaded objects it
/// referenced.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let row = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;

    AnnouncementRepo::delete(&state.pool, id).await?;
    remove_objects(&state.storage, buckets::ANNOUNCEMENT, &row.image_urls).await;
    Ok(StatusCode::NO_CONTENT)
}
