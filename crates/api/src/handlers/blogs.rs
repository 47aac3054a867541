//! Handlers for the `/blogs` resource (read-only).

use axum::extract::{Query, State};
use axum::Json;
use chapter_db::models::blog::Blog;
use chapter_db::repositories::BlogRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Blog>>> {
    let rows = BlogRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(rows))
}
