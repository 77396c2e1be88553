//! PostgreSQL-backed [`CatalogStore`].

use async_trait::async_trait;
use catalog_core::search::SearchQuery;
use catalog_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use super::{CatalogStore, StoreBackend, StoreResult};
use crate::models::category::{Category, CreateCategory};
use crate::models::component::{Component, CreateComponent, UpdateComponent};

/// Column list for categories queries.
const CATEGORY_COLUMNS: &str = "id, name, icon, description, component_count";

/// Column list for components queries.
const COMPONENT_COLUMNS: &str = "id, name, description, html, css, js, category_id, tags, is_active";

/// Row lock on the category whose count a transaction is about to change.
///
/// Must be the first statement touching that category. Under READ COMMITTED
/// every later statement takes its snapshot after the lock is granted, so
/// the recount sees all components committed by earlier writers. Unknown
/// categories lock nothing and their recount updates zero rows.
const LOCK_CATEGORY_SQL: &str = "SELECT id FROM categories WHERE id = $1 FOR UPDATE";

/// Set a category's count to its current number of active components.
const RECOUNT_SQL: &str = "\
    UPDATE categories SET component_count = ( \
        SELECT COUNT(*) FROM components \
        WHERE category_id = $1 AND is_active = TRUE \
    ) \
    WHERE id = $1";

/// Catalog store backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn lock_category(conn: &mut PgConnection, category_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(LOCK_CATEGORY_SQL)
            .bind(category_id)
            .fetch_optional(conn)
            .await?;
        Ok(())
    }

    async fn recount(conn: &mut PgConnection, category_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(RECOUNT_SQL)
            .bind(category_id)
            .execute(conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id");
        Ok(sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn category_by_id(&self, id: DbId) -> StoreResult<Option<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        Ok(sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        let query = format!(
            "INSERT INTO categories (name, icon, description, component_count)
             VALUES ($1, $2, $3, 0)
             RETURNING {CATEGORY_COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(input.normalized_description())
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    async fn update_category_component_count(
        &self,
        category_id: DbId,
        count: i64,
    ) -> StoreResult<()> {
        sqlx::query("UPDATE categories SET component_count = $2 WHERE id = $1")
            .bind(category_id)
            .bind(count)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn components(&self) -> StoreResult<Vec<Component>> {
        let query = format!(
            "SELECT {COMPONENT_COLUMNS} FROM components WHERE is_active = TRUE ORDER BY id"
        );
        Ok(sqlx::query_as::<_, Component>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn components_by_category(&self, category_id: DbId) -> StoreResult<Vec<Component>> {
        let query = format!(
            "SELECT {COMPONENT_COLUMNS} FROM components
             WHERE category_id = $1 AND is_active = TRUE
             ORDER BY id"
        );
        Ok(sqlx::query_as::<_, Component>(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn component_by_id(&self, id: DbId) -> StoreResult<Option<Component>> {
        let query = format!("SELECT {COMPONENT_COLUMNS} FROM components WHERE id = $1");
        Ok(sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_component(&self, input: &CreateComponent) -> StoreResult<Component> {
        let mut tx = self.pool.begin().await?;
        Self::lock_category(&mut tx, input.category_id).await?;

        let query = format!(
            "INSERT INTO components (name, description, html, css, js, category_id, tags, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
             RETURNING {COMPONENT_COLUMNS}"
        );
        let component = sqlx::query_as::<_, Component>(&query)
            .bind(&input.name)
            .bind(input.normalized_description())
            .bind(&input.html)
            .bind(&input.css)
            .bind(&input.js)
            .bind(input.category_id)
            .bind(&input.tags)
            .fetch_one(&mut *tx)
            .await?;

        Self::recount(&mut tx, component.category_id).await?;
        tx.commit().await?;

        tracing::debug!(
            component_id = component.id,
            category_id = component.category_id,
            "Component created",
        );
        Ok(component)
    }

    async fn update_component(
        &self,
        id: DbId,
        update: &UpdateComponent,
    ) -> StoreResult<Option<Component>> {
        // For description and tags, $3/$8 say whether the field was supplied;
        // the value that follows may be NULL to clear it.
        let description = update.normalized_description();
        let query = format!(
            "UPDATE components SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                html = COALESCE($5, html),
                css = COALESCE($6, css),
                js = COALESCE($7, js),
                tags = CASE WHEN $8 THEN $9 ELSE tags END,
                category_id = COALESCE($10, category_id),
                is_active = COALESCE($11, is_active)
             WHERE id = $1
             RETURNING {COMPONENT_COLUMNS}"
        );
        let component = sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .bind(&update.name)
            .bind(description.is_some())
            .bind(description.flatten())
            .bind(&update.html)
            .bind(&update.css)
            .bind(&update.js)
            .bind(update.tags.is_some())
            .bind(update.tags.clone().flatten())
            .bind(update.category_id)
            .bind(update.is_active)
            .fetch_optional(&self.pool)
            .await?;
        if component.is_some() {
            tracing::debug!(component_id = id, "Component updated");
        }
        Ok(component)
    }

    async fn delete_component(&self, id: DbId) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        // Lock the component first so its category cannot move while the
        // category lock is taken.
        let category_id: Option<DbId> =
            sqlx::query_scalar("SELECT category_id FROM components WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(category_id) = category_id else {
            return Ok(false);
        };

        Self::lock_category(&mut tx, category_id).await?;
        sqlx::query("UPDATE components SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        Self::recount(&mut tx, category_id).await?;
        tx.commit().await?;

        tracing::debug!(component_id = id, category_id, "Component soft-deleted");
        Ok(true)
    }

    async fn search_components(&self, query: &str) -> StoreResult<Vec<Component>> {
        let query = SearchQuery::new(query);
        Ok(self
            .components()
            .await?
            .into_iter()
            .filter(|c| c.matches(&query))
            .collect())
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Postgres
    }
}
