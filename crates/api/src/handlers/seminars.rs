//! Handlers for the `/seminars` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chapter_core::error::CoreError;
use chapter_core::types::DbId;
use chapter_db::models::seminar::{CreateSeminar, Seminar};
use chapter_db::repositories::SeminarRepo;
use chapter_storage::buckets;

use crate::error::{AppError, AppResult};
use crate::multipart::ContentForm;
use crate::query::PaginationParams;
use crate::state::AppState;
use crate::upload::{remove_objects, rollback_uploads, upload_images, urls};

/// GET /api/seminars
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Seminar>>> {
    let rows = SeminarRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(rows))
}

/// GET /api/seminars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Seminar>> {
    let row = SeminarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Seminar",
            id,
        }))?;
    Ok(Json(row))
}

/// POST /api/seminars
///
/// Accepts a multipart form with `title`, `description`, `date`
/// (YYYY-MM-DD), optional `speaker` and `status`, and zero or more
/// `images` file parts uploaded to the `seminars` bucket.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Seminar>)> {
    let form = ContentForm::collect(multipart).await?;
    let title = form.require("title")?;
    let description = form.require("description")?;
    let date = form.require_date("date")?;
    let speaker = form.optional("speaker");
    let status = form.optional("status");

    let uploaded = upload_images(&state.storage, buckets::SEMINARS, form.files()).await?;
    let input = CreateSeminar {
        title,
        description,
        speaker,
        date,
        status,
        image_urls: urls(&uploaded),
    };

    match SeminarRepo::create(&state.pool, &input).await {
        Ok(row) => Ok((StatusCode::CREATED, Json(row))),
        Err(err) => {
            rollback_uploads(&state.storage, buckets::SEMINARS, &uploaded).await;
            Err(err.into())
        }
    }
}

/// DELETE /api/seminars/{id}
///
/// Removes the row, then best-effort deletes the uploaded objects it
/// referenced.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let row = SeminarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Seminar",
            id,
        }))?;

    SeminarRepo::delete(&state.pool, id).await?;
    remove_objects(&state.storage, buckets::SEMINARS, &row.image_urls).await;
    Ok(StatusCode::NO_CONTENT)
}
