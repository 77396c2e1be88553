//! The catalog storage contract and its two backends.
//!
//! [`CatalogStore`] is implemented by [`MemoryCatalogStore`] (process-local
//! maps, seeded with demo data) and [`PgCatalogStore`] (PostgreSQL). Handlers
//! only ever see `Arc<dyn CatalogStore>`; [`connect_store`] picks the backend
//! once at startup.
//!
//! Both backends uphold the count invariant: once a component create or
//! delete returns, the owning category's `component_count` equals the
//! number of active components referencing it.

mod memory;
mod postgres;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use catalog_core::types::DbId;

use crate::models::category::{Category, CreateCategory};
use crate::models::component::{Component, CreateComponent, UpdateComponent};

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Failure of the backend itself. Absence of a record is never an error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Which backend is serving the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

impl StoreBackend {
    pub fn name(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Postgres => "postgres",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage operations for categories and components.
///
/// All returned values are owned snapshots; mutating them has no effect on
/// the store.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All categories, ordered by id.
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    /// Find a category by its ID.
    async fn category_by_id(&self, id: DbId) -> StoreResult<Option<Category>>;

    /// Create a category with `component_count = 0`.
    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category>;

    /// Overwrite a category's cached component count. Unknown ids are a no-op.
    async fn update_category_component_count(
        &self,
        category_id: DbId,
        count: i64,
    ) -> StoreResult<()>;

    /// All active components, ordered by id.
    async fn components(&self) -> StoreResult<Vec<Component>>;

    /// Active components belonging to `category_id`, ordered by id.
    async fn components_by_category(&self, category_id: DbId) -> StoreResult<Vec<Component>>;

    /// Find a component by ID, including soft-deleted ones.
    async fn component_by_id(&self, id: DbId) -> StoreResult<Option<Component>>;

    /// Insert an active component and recount its category.
    ///
    /// The category is not required to exist; recounting an unknown
    /// category does nothing.
    async fn create_component(&self, input: &CreateComponent) -> StoreResult<Component>;

    /// Merge the supplied fields onto an existing component.
    ///
    /// Returns `None` when the id is unknown. No category is recounted, even
    /// when `category_id` or `is_active` changes; counts for the affected
    /// categories stay stale until their next component create or delete.
    async fn update_component(
        &self,
        id: DbId,
        update: &UpdateComponent,
    ) -> StoreResult<Option<Component>>;

    /// Soft-delete a component and recount its category.
    ///
    /// Returns `false` only when the id is unknown. Deleting an already
    /// deleted component returns `true` again.
    async fn delete_component(&self, id: DbId) -> StoreResult<bool>;

    /// Active components whose name, description or any tag contains
    /// `query`, compared case-insensitively. An empty query matches all.
    async fn search_components(&self, query: &str) -> StoreResult<Vec<Component>>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    fn backend(&self) -> StoreBackend;
}

/// Choose and initialize the process-wide store.
///
/// With a database URL this connects, checks health, applies migrations
/// and returns a [`PgCatalogStore`]. Without one it returns a
/// [`MemoryCatalogStore`] preloaded with the demo catalog.
pub async fn connect_store(database_url: Option<&str>) -> StoreResult<Arc<dyn CatalogStore>> {
    match database_url {
        Some(url) => {
            let pool = crate::create_pool(url).await?;
            tracing::info!("Database connection pool created");

            crate::health_check(&pool).await?;
            tracing::info!("Database health check passed");

            crate::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");

            tracing::info!(backend = %StoreBackend::Postgres, "Catalog store selected");
            Ok(Arc::new(PgCatalogStore::new(pool)))
        }
        None => {
            let store = MemoryCatalogStore::new();
            tracing::info!(
                backend = %StoreBackend::Memory,
                "No DATABASE_URL configured, catalog store is process-local",
            );
            Ok(Arc::new(store))
        }
    }
}
