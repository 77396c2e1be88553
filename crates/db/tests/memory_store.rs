//! Contract and seeding tests for `MemoryCatalogStore`.

mod common;

use assert_matches::assert_matches;
use catalog_db::seed::{
    add_navigation_components, seed_if_empty, NavigationReport, SeedReport, DEFAULT_CATEGORIES,
    DEMO_COMPONENTS, NAVIGATION_CATEGORY, NAVIGATION_COMPONENTS,
};
use catalog_db::store::{CatalogStore, MemoryCatalogStore, StoreBackend};

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_category_starts_with_zero_count() {
    common::create_category_starts_with_zero_count(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn create_then_get_round_trips() {
    common::create_then_get_round_trips(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn missing_optional_fields_stay_absent() {
    common::missing_optional_fields_stay_absent(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn counts_follow_creates_and_deletes() {
    common::counts_follow_creates_and_deletes(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn count_matches_active_set_after_mixed_operations() {
    common::count_matches_active_set_after_mixed_operations(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn delete_semantics() {
    common::delete_semantics(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn search_semantics() {
    common::search_semantics(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn update_merges_fields_without_recount() {
    common::update_merges_fields_without_recount(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn update_clears_nullable_fields() {
    common::update_clears_nullable_fields(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn orphan_component_is_accepted() {
    common::orphan_component_is_accepted(&MemoryCatalogStore::empty()).await;
}

#[tokio::test]
async fn manual_count_update() {
    common::manual_count_update(&MemoryCatalogStore::empty()).await;
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_store_is_browsable_immediately() {
    let store = MemoryCatalogStore::new();

    assert_eq!(store.backend(), StoreBackend::Memory);
    assert!(store.health_check().await.is_ok());

    let categories = store.categories().await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let expected: Vec<&str> = DEFAULT_CATEGORIES.iter().map(|c| c.name).collect();
    assert_eq!(names, expected);

    let components = store.components().await.unwrap();
    assert_eq!(components.len(), DEMO_COMPONENTS.len());

    let buttons = common::category(&store, 1).await;
    assert_eq!(buttons.name, "Buttons");
    assert_eq!(buttons.component_count, 3);
    assert_eq!(common::category(&store, 2).await.component_count, 1);
}

#[tokio::test]
async fn seeded_scenario_keeps_counts_consistent() {
    let store = MemoryCatalogStore::new();

    let created = store
        .create_component(&common::new_component(1, "Extra Button"))
        .await
        .unwrap();
    assert_eq!(created.id, DEMO_COMPONENTS.len() as i64 + 1);
    assert_eq!(common::category(&store, 1).await.component_count, 4);

    store.delete_component(created.id).await.unwrap();
    assert_eq!(common::category(&store, 1).await.component_count, 3);
}

#[tokio::test]
async fn seed_if_empty_populates_empty_store() {
    let store = MemoryCatalogStore::empty();

    let report = seed_if_empty(&store).await.unwrap();
    assert_eq!(
        report,
        SeedReport::Seeded {
            categories: DEFAULT_CATEGORIES.len(),
            components: DEMO_COMPONENTS.len(),
        }
    );

    let buttons = common::category(&store, 1).await;
    assert_eq!(buttons.component_count, 3);

    let again = seed_if_empty(&store).await.unwrap();
    assert_eq!(again, SeedReport::AlreadySeeded);
    assert_eq!(
        store.components().await.unwrap().len(),
        DEMO_COMPONENTS.len()
    );
}

#[tokio::test]
async fn seed_if_empty_skips_prepopulated_store() {
    let store = MemoryCatalogStore::new();
    assert_eq!(seed_if_empty(&store).await.unwrap(), SeedReport::AlreadySeeded);
}

#[tokio::test]
async fn navigation_pack_attaches_to_navigation_category() {
    let store = MemoryCatalogStore::new();

    let report = add_navigation_components(&store).await.unwrap();
    let NavigationReport::Added {
        category_id,
        components,
    } = report
    else {
        panic!("expected navigation components to be added, got {report:?}");
    };
    assert_eq!(components, NAVIGATION_COMPONENTS.len());

    let navigation = common::category(&store, category_id).await;
    assert_eq!(navigation.name, NAVIGATION_CATEGORY);
    assert_eq!(navigation.component_count, NAVIGATION_COMPONENTS.len() as i64);

    let sidebar = store.search_components("sidebar").await.unwrap();
    assert_eq!(sidebar.len(), 1);
    assert_eq!(sidebar[0].category_id, category_id);
}

#[tokio::test]
async fn navigation_pack_needs_navigation_category() {
    let store = MemoryCatalogStore::empty();
    let report = add_navigation_components(&store).await.unwrap();
    assert_matches!(report, NavigationReport::CategoryMissing);
    assert!(store.components().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_leave_counts_consistent() {
    let store = std::sync::Arc::new(MemoryCatalogStore::empty());
    let category_id = store
        .create_category(&common::new_category("Buttons"))
        .await
        .unwrap()
        .id;

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = std::sync::Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let created = store
                .create_component(&common::new_component(category_id, &format!("C{i}")))
                .await
                .unwrap();
            if i % 4 == 0 {
                store.delete_component(created.id).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let category = common::category(store.as_ref(), category_id).await;
    assert_eq!(category.component_count, 24);
    assert_eq!(
        store.components_by_category(category_id).await.unwrap().len(),
        24
    );
}
