pub mod achievements;
pub mod announcements;
pub mod blogs;
pub mod committees;
pub mod events;
pub mod health;
pub mod seminars;
pub mod site_visits;
pub mod upcoming_events;
pub mod webinars;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /achievements                    list, create
/// /achievements/{id}               get, delete
///
/// /announcements                   list, create
/// /announcements/{id}              get, delete
///
/// /blogs                           list
///
/// /events                          list, create
/// /events/{id}                     get, delete
///
/// /seminars                        list, create
/// /seminars/{id}                   get, delete
///
/// /site-visits                     list, create
/// /site-visits/upload              create (alias)
/// /site-visits/{id}                get, delete
///
/// /webinars                        list, create
/// /webinars/{id}                   get, delete
/// /webinar[...]                    alias for /webinars
///
/// /upcoming-events                 list
/// /upcoming-events/{id}            get
///
/// /committees                      list (optional ?year=)
/// /committees/years                distinct years
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/achievements", achievements::router())
        .nest("/announcements", announcements::router())
        .nest("/blogs", blogs::router())
        .nest("/events", events::router())
        .nest("/seminars", seminars::router())
        .nest("/site-visits", site_visits::router())
        // Both spellings are in use by the frontend.
        .nest("/webinars", webinars::router())
        .nest("/webinar", webinars::router())
        .nest("/upcoming-events", upcoming_events::router())
        .nest("/committees", committees::router())
}
