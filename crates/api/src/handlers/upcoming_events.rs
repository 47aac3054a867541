//! Handlers for the `/upcoming-events` resource (read-only).

use axum::extract::{Path, Query, State};
use axum::Json;
use chapter_core::error::CoreError;
use chapter_core::types::DbId;
use chapter_db::models::upcoming_event::UpcomingEvent;
use chapter_db::repositories::UpcomingEventRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/upcoming-events
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<UpcomingEvent>>> {
    let rows = UpcomingEventRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(rows))
}

/// GET /api/upcoming-events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UpcomingEvent>> {
    let row = UpcomingEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UpcomingEvent",
            id,
        }))?;
    Ok(Json(row))
}
