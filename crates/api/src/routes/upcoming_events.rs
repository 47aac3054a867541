//! Route definitions for the upcoming-events banner.

use axum::routing::get;
use axum::Router;

use crate::handlers::upcoming_events;
use crate::state::AppState;

/// Upcoming-event routes mounted at `/upcoming-events`. Read-only.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(upcoming_events::list))
        .route("/{id}", get(upcoming_events::get_by_id))
}
