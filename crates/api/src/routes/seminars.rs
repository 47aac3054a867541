//! Route definitions for seminars.

use axum::routing::get;
use axum::Router;

use crate::handlers::seminars;
use crate::state::AppState;

/// Seminar routes mounted at `/seminars`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(seminars::list).post(seminars::create))
        .route("/{id}", get(seminars::get_by_id).delete(seminars::delete))
}
