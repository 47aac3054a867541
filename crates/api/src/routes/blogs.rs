//! Route definitions for blog links.

use axum::routing::get;
use axum::Router;

use crate::handlers::blogs;
use crate::state::AppState;

/// Blog routes mounted at `/blogs`. Read-only.
///
/// ```text
/// GET    /        -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(blogs::list))
}
