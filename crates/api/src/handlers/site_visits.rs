//! Handlers for the `/site-visits` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chapter_core::error::CoreError;
use chapter_core::types::DbId;
use chapter_db::models::site_visit::{CreateSiteVisit, SiteVisit};
use chapter_db::repositories::SiteVisitRepo;
use chapter_storage::buckets;

use crate::error::{AppError, AppResult};
use crate::multipart::ContentForm;
use crate::query::PaginationParams;
use crate::state::AppState;
use crate::upload::{remove_objects, rollback_uploads, upload_images, urls};

/// GET /api/site-visits
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<SiteVisit>>> {
    let rows = SiteVisitRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(rows))
}

/// GET /api/site-visits/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SiteVisit>> {
    let row = SiteVisitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteVisit",
            id,
        }))?;
    Ok(Json(row))
}

/// POST /api/site-visits (also mounted at /api/site-visits/upload)
///
/// Accepts a multipart form with `title`, `description`, `date`
/// (YYYY-MM-DD), optional `location` and `status`, and zero or more
/// `images` file parts uploaded to the `site-visits` bucket.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<SiteVisit>)> {
    let form = ContentForm::collect(multipart).await?;
    let title = form.require("title")?;
    let description = form.require("description")?;
    let date = form.require_date("date")?;
    let location = form.optional("location");
    let status = form.optional("status");

    let uploaded = upload_images(&state.storage, buckets::SITE_VISITS, form.files()).await?;
    let input = CreateSiteVisit {
        title,
        description,
        location,
        date,
        status,
        image_urls: urls(&uploaded),
    };

    match SiteVisitRepo::create(&state.pool, &input).await {
        Ok(row) => Ok((StatusCode::CREATED, Json(row))),
        Err(err) => {
            rollback_uploads(&state.storage, buckets::SITE_VISITS, &uploaded).await;
            Err(err.into())
        }
    }
}

/// DELETE /api/site-visits/{id}
///
/// Removes the row, then best-effort deletes the uploaded objects it
/// referenced.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let row = SiteVisitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteVisit",
            id,
        }))?;

    SiteVisitRepo::delete(&state.pool, id).await?;
    remove_objects(&state.storage, buckets::SITE_VISITS, &row.image_urls).await;
    Ok(StatusCode::NO_CONTENT)
}
