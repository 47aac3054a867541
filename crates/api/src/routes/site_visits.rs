//! Route definitions for site visits.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::site_visits;
use crate::state::AppState;

/// Site visit routes mounted at `/site-visits`.
///
/// `/upload` is an alias for the create handler kept for the admin
/// panel, which posts multipart forms to that path.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// POST   /upload  -> create (alias)
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site_visits::list).post(site_visits::create))
        .route("/upload", post(site_visits::create))
        .route(
            "/{id}",
            get(site_visits::get_by_id).delete(site_visits::delete),
        )
}
