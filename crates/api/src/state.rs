use std::sync::Arc;

use catalog_db::store::CatalogStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The catalog store selected at startup. Tests inject a fresh
    /// in-memory store per app.
    pub store: Arc<dyn CatalogStore>,
}
