//! Route definitions for committee rosters.

use axum::routing::get;
use axum::Router;

use crate::handlers::committees;
use crate::state::AppState;

/// Committee routes mounted at `/committees`. Read-only.
///
/// ```text
/// GET    /        -> list (optional ?year=)
/// GET    /years   -> years
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(committees::list))
        .route("/years", get(committees::years))
}
