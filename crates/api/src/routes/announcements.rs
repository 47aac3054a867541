//! Route definitions for announcements.

use axum::routing::get;
use axum::Router;

use crate::handlers::announcements;
use crate::state::AppState;

/// Announcement routes mounted at `/announcements`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(announcements::list).post(announcements::create))
        .route(
            "/{id}",
            get(announcements::get_by_id).delete(announcements::delete),
        )
}
