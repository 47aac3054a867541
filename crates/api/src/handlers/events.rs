//! Handlers for the `/events` resource (social events).

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chapter_core::error::CoreError;
use chapter_core::types::DbId;
use chapter_db::models::event::{CreateEvent, Event};
use chapter_db::repositories::EventRepo;
use chapter_storage::buckets;

use crate::error::{AppError, AppResult};
use crate::multipart::ContentForm;
use crate::query::PaginationParams;
use crate::state::AppState;
use crate::upload::{remove_objects, rollback_uploads, upload_images, urls};

/// GET /api/events
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Event>>> {
    let rows = EventRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(rows))
}

/// GET /api/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let row = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(row))
}

/// POST /api/events
///
/// Accepts a multipart form with `title`, `description`, `date`
/// (YYYY-MM-DD), an optional `status`, and zero or more `images` file
/// parts uploaded to the `events` bucket.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Event>)> {
    let form = ContentForm::collect(multipart).await?;
    let title = form.require("title")?;
    let description = form.require("description")?;
    let date = form.require_date("date")?;
    let status = form.optional("status");

    let uploaded = upload_images(&state.storage, buckets::EVENTS, form.files()).await?;
    let input = CreateEvent {
        title,
        description,
        date,
        status,
        image_urls: urls(&uploaded),
    };

    match EventRepo::create(&state.pool, &input).await {
        Ok(row) => Ok((StatusCode::CREATED, Json(row))),
        Err(err) => {
            rollback_uploads(&state.storage, buckets::EVENTS, &uploaded).await;
            Err(err.into())
        }
    }
}

/// DELETE /api/events/{id}
///
/// Removes the row, then best-effort deletes the uploaded objects it
/// referenced.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let row = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    EventRepo::delete(&state.pool, id).await?;
    remove_objects(&state.storage, buckets::EVENTS, &row.image_urls).await;
    Ok(StatusCode::NO_CONTENT)
}
