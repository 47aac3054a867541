//! Supabase Storage access.
//!
//! Wraps the Supabase Storage HTTP API (object upload, deletion, public
//! URL construction) using [`reqwest`].

pub mod buckets;
mod client;

pub use client::{object_key, StorageClient, StorageError};
