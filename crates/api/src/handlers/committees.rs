//! Handlers for the `/committees` resource (read-only).

use axum::extract::{Query, State};
use axum::Json;
use chapter_db::models::committee::CommitteeImage;
use chapter_db::repositories::CommitteeRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the committee listing (`?year=2024-25`).
#[derive(Debug, Deserialize)]
pub struct CommitteeParams {
    pub year: Option<String>,
}

/// GET /api/committees
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CommitteeParams>,
) -> AppResult<Json<Vec<CommitteeImage>>> {
    let rows = CommitteeRepo::list(&state.pool, params.year.as_deref()).await?;
    Ok(Json(rows))
}

/// GET /api/committees/years
pub async fn years(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let years = CommitteeRepo::list_years(&state.pool).await?;
    Ok(Json(years))
}
