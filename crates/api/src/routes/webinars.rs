//! Route definitions for webinars.

use axum::routing::get;
use axum::Router;

use crate::handlers::webinars;
use crate::state::AppState;

/// Webinar routes, mounted at both `/webinars` and `/webinar`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(webinars::list).post(webinars::create))
        .route("/{id}", get(webinars::get_by_id).delete(webinars::delete))
}
