//! Process-local [`CatalogStore`] backed by ordered maps.
//!
//! Used when no database is configured. Contents are lost on restart.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use catalog_core::search::SearchQuery;
use catalog_core::types::DbId;
use tokio::sync::RwLock;

use super::{CatalogStore, StoreBackend, StoreResult};
use crate::models::category::{Category, CreateCategory};
use crate::models::component::{Component, CreateComponent, UpdateComponent};
use crate::seed::{DEFAULT_CATEGORIES, DEMO_COMPONENTS};

/// Maps and id counters. Always accessed under the store's lock.
#[derive(Debug)]
struct CatalogState {
    categories: BTreeMap<DbId, Category>,
    components: BTreeMap<DbId, Component>,
    next_category_id: DbId,
    next_component_id: DbId,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            components: BTreeMap::new(),
            next_category_id: 1,
            next_component_id: 1,
        }
    }
}

impl CatalogState {
    fn insert_category(&mut self, input: &CreateCategory) -> Category {
        let id = self.next_category_id;
        self.next_category_id += 1;

        let category = Category {
            id,
            name: input.name.clone(),
            icon: input.icon.clone(),
            description: input.normalized_description(),
            component_count: 0,
        };
        self.categories.insert(id, category.clone());
        category
    }

    fn insert_component(&mut self, input: &CreateComponent) -> Component {
        let id = self.next_component_id;
        self.next_component_id += 1;

        let component = Component {
            id,
            name: input.name.clone(),
            description: input.normalized_description(),
            html: input.html.clone(),
            css: input.css.clone(),
            js: input.js.clone(),
            category_id: input.category_id,
            tags: input.tags.clone(),
            is_active: true,
        };
        self.components.insert(id, component.clone());
        component
    }

    fn active_in_category(&self, category_id: DbId) -> impl Iterator<Item = &Component> {
        self.components
            .values()
            .filter(move |c| c.category_id == category_id && c.is_listed())
    }

    fn set_count(&mut self, category_id: DbId, count: i64) {
        if let Some(category) = self.categories.get_mut(&category_id) {
            category.component_count = count;
        }
    }

    /// Recompute a category's count from the component map.
    fn recount(&mut self, category_id: DbId) -> i64 {
        let count = self.active_in_category(category_id).count() as i64;
        self.set_count(category_id, count);
        count
    }
}

/// In-memory catalog store.
///
/// One lock guards both maps, so a component mutation and the recount of
/// its category happen in a single critical section.
#[derive(Debug)]
pub struct MemoryCatalogStore {
    state: RwLock<CatalogState>,
}

impl MemoryCatalogStore {
    /// A store preloaded with the default categories and demo components.
    pub fn new() -> Self {
        let mut state = CatalogState::default();

        let mut ids = HashMap::new();
        for seed in DEFAULT_CATEGORIES {
            let category = state.insert_category(&seed.to_create());
            ids.insert(seed.name, category.id);
        }
        for seed in DEMO_COMPONENTS {
            if let Some(&category_id) = ids.get(seed.category) {
                state.insert_component(&seed.to_create(category_id));
            }
        }
        let category_ids: Vec<DbId> = state.categories.keys().copied().collect();
        for id in category_ids {
            state.recount(id);
        }

        Self {
            state: RwLock::new(state),
        }
    }

    /// A store with no categories or components.
    pub fn empty() -> Self {
        Self {
            state: RwLock::new(CatalogState::default()),
        }
    }
}

impl Default for MemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn category_by_id(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        let category = self.state.write().await.insert_category(input);
        tracing::debug!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    async fn update_category_component_count(
        &self,
        category_id: DbId,
        count: i64,
    ) -> StoreResult<()> {
        self.state.write().await.set_count(category_id, count);
        Ok(())
    }

    async fn components(&self) -> StoreResult<Vec<Component>> {
        let state = self.state.read().await;
        Ok(state
            .components
            .values()
            .filter(|c| c.is_listed())
            .cloned()
            .collect())
    }

    async fn components_by_category(&self, category_id: DbId) -> StoreResult<Vec<Component>> {
        let state = self.state.read().await;
        Ok(state.active_in_category(category_id).cloned().collect())
    }

    async fn component_by_id(&self, id: DbId) -> StoreResult<Option<Component>> {
        Ok(self.state.read().await.components.get(&id).cloned())
    }

    async fn create_component(&self, input: &CreateComponent) -> StoreResult<Component> {
        let mut state = self.state.write().await;
        let component = state.insert_component(input);
        let count = state.recount(component.category_id);
        tracing::debug!(
            component_id = component.id,
            category_id = component.category_id,
            component_count = count,
            "Component created",
        );
        Ok(component)
    }

    async fn update_component(
        &self,
        id: DbId,
        update: &UpdateComponent,
    ) -> StoreResult<Option<Component>> {
        let mut state = self.state.write().await;
        let Some(component) = state.components.get_mut(&id) else {
            return Ok(None);
        };
        component.apply(update);
        tracing::debug!(component_id = id, "Component updated");
        Ok(Some(component.clone()))
    }

    async fn delete_component(&self, id: DbId) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let Some(component) = state.components.get_mut(&id) else {
            return Ok(false);
        };
        component.is_active = false;
        let category_id = component.category_id;
        let count = state.recount(category_id);
        tracing::debug!(
            component_id = id,
            category_id,
            component_count = count,
            "Component soft-deleted",
        );
        Ok(true)
    }

    async fn search_components(&self, query: &str) -> StoreResult<Vec<Component>> {
        let query = SearchQuery::new(query);
        let state = self.state.read().await;
        Ok(state
            .components
            .values()
            .filter(|c| c.is_listed() && c.matches(&query))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
