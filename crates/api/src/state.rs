use std::sync::Arc;

use chapter_storage::StorageClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: chapter_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Supabase Storage client for image uploads.
    pub storage: Arc<StorageClient>,
}
