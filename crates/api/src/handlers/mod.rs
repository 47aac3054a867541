//! Request handlers for the content API.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the corresponding repository in
//! `chapter_db` and map errors via [`crate::error::AppError`]; the
//! upload-backed create handlers share the multipart collector and
//! upload helpers.

pub mod achievements;
pub mod announcements;
pub mod blogs;
pub mod committees;
pub mod events;
pub mod seminars;
pub mod site_visits;
pub mod upcoming_events;
pub mod webinars;
