//! Route definitions for achievements.

use axum::routing::get;
use axum::Router;

use crate::handlers::achievements;
use crate::state::AppState;

/// Achievement routes mounted at `/achievements`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(achievements::list).post(achievements::create))
        .route(
            "/{id}",
            get(achievements::get_by_id).delete(achievements::delete),
        )
}
