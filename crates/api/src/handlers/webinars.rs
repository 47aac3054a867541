//! Handlers for the `/webinars` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chapter_core::error::CoreError;
use chapter_core::types::DbId;
use chapter_db::models::webinar::{CreateWebinar, Webinar};
use chapter_db::repositories::WebinarRepo;
use chapter_storage::buckets;

use crate::error::{AppError, AppResult};
use crate::multipart::ContentForm;
use crate::query::PaginationParams;
use crate::state::AppState;
use crate::upload::{remove_objects, rollback_uploads, upload_images, urls};

/// GET /api/webinars
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Webinar>>> {
    let rows = WebinarRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(rows))
}

/// GET /api/webinars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Webinar>> {
    let row = WebinarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Webinar",
            id,
        }))?;
    Ok(Json(row))
}

/// POST /api/webinars
///
/// Accepts a multipart form with `title`, `description`, `date`
/// (YYYY-MM-DD), optional `presenter`, `meeting_link`, and `status`, and
/// zero or more `images` file parts uploaded to the `webinar` bucket.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Webinar>)> {
    let form = ContentForm::collect(multipart).await?;
    let title = form.require("title")?;
    let description = form.require("description")?;
    let date = form.require_date("date")?;
    let presenter = form.optional("presenter");
    let meeting_link = form.optional("meeting_link");
    let status = form.optional("status");

    let uploaded = upload_images(&state.storage, buckets::WEBINAR, form.files()).await?;
    let input = CreateWebinar {
        title,
        description,
        presenter,
        meeting_link,
        date,
        status,
        image_urls: urls(&uploaded),
    };

    match WebinarRepo::create(&state.pool, &input).await {
        Ok(row) => Ok((StatusCode::CREATED, Json(row))),
        Err(err) => {
            rollback_uploads(&state.storage, buckets::WEBINAR, &uploaded).await;
            Err(err.into())
        }
    }
}

/// DELETE /api/webinars/{id}
///
/// Removes the row, then best-effort deletes the uploaded objects it
/// referenced.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let row = WebinarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Webinar",
            id,
        }))?;

    WebinarRepo::delete(&state.pool, id).await?;
    remove_objects(&state.storage, buckets::WEBINAR, &row.image_urls).await;
    Ok(StatusCode::NO_CONTENT)
}
