//! Shared domain types for the chapter content backend.
//!
//! This crate has no internal dependencies so it can be used by the
//! database, storage, and API layers alike.

pub mod error;
pub mod pagination;
pub mod types;
