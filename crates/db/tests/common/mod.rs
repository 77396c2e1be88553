//! Store contract checks shared by the in-memory and PostgreSQL test suites.
//!
//! Every check expects a store with no categories or components.

#![allow(dead_code)]

use catalog_db::models::category::{Category, CreateCategory};
use catalog_db::models::component::{Component, CreateComponent, UpdateComponent};
use catalog_db::store::CatalogStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        icon: format!("fas fa-{}", name.to_lowercase()),
        description: None,
    }
}

pub fn new_component(category_id: i64, name: &str) -> CreateComponent {
    CreateComponent {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        html: format!("<div class=\"{}\"></div>", name.to_lowercase()),
        css: String::new(),
        js: String::new(),
        category_id,
        tags: Some(vec!["demo".to_string()]),
    }
}

pub async fn category(store: &dyn CatalogStore, id: i64) -> Category {
    store
        .category_by_id(id)
        .await
        .unwrap()
        .expect("category should exist")
}

async fn active_in(store: &dyn CatalogStore, category_id: i64) -> i64 {
    store.components_by_category(category_id).await.unwrap().len() as i64
}

fn ids(components: &[Component]) -> Vec<i64> {
    let mut ids: Vec<i64> = components.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids
}

// ---------------------------------------------------------------------------
// Contract checks
// ---------------------------------------------------------------------------

pub async fn create_category_starts_with_zero_count(store: &dyn CatalogStore) {
    let created = store
        .create_category(&CreateCategory {
            name: "Buttons".into(),
            icon: "fas fa-hand-pointer".into(),
            description: Some(String::new()),
        })
        .await
        .unwrap();

    assert_eq!(created.component_count, 0);
    assert_eq!(created.description, None, "empty description is normalized to None");
    assert_eq!(category(store, created.id).await, created);
    assert!(store.category_by_id(created.id + 1000).await.unwrap().is_none());
}

pub async fn create_then_get_round_trips(store: &dyn CatalogStore) {
    let cat = store.create_category(&new_category("Buttons")).await.unwrap();
    let input = CreateComponent {
        name: "Glass Button".into(),
        description: Some("Glassmorphism style button".into()),
        html: "<button class=\"btn-glass\">Glass Effect</button>".into(),
        css: ".btn-glass { backdrop-filter: blur(10px); }".into(),
        js: "console.log('glass');".into(),
        category_id: cat.id,
        tags: Some(vec!["glass".into(), "modern".into()]),
    };

    let created = store.create_component(&input).await.unwrap();
    let fetched = store
        .component_by_id(created.id)
        .await
        .unwrap()
        .expect("component should exist");

    assert_eq!(fetched, created);
    assert!(fetched.is_active);
    assert_eq!(fetched.name, input.name);
    assert_eq!(fetched.description, input.description);
    assert_eq!(fetched.html, input.html);
    assert_eq!(fetched.css, input.css);
    assert_eq!(fetched.js, input.js);
    assert_eq!(fetched.category_id, input.category_id);
    assert_eq!(fetched.tags, input.tags);
}

pub async fn missing_optional_fields_stay_absent(store: &dyn CatalogStore) {
    let cat = store.create_category(&new_category("Headings")).await.unwrap();
    let created = store
        .create_component(&CreateComponent {
            name: "Plain".into(),
            description: None,
            html: String::new(),
            css: String::new(),
            js: String::new(),
            category_id: cat.id,
            tags: None,
        })
        .await
        .unwrap();

    assert_eq!(created.description, None);
    assert_eq!(created.tags, None);
}

pub async fn counts_follow_creates_and_deletes(store: &dyn CatalogStore) {
    let buttons = store.create_category(&new_category("Buttons")).await.unwrap();
    let headings = store.create_category(&new_category("Headings")).await.unwrap();

    let first = store
        .create_component(&new_component(buttons.id, "First"))
        .await
        .unwrap();
    store
        .create_component(&new_component(buttons.id, "Second"))
        .await
        .unwrap();

    assert_eq!(category(store, buttons.id).await.component_count, 2);
    assert_eq!(category(store, headings.id).await.component_count, 0);

    assert!(store.delete_component(first.id).await.unwrap());

    assert_eq!(category(store, buttons.id).await.component_count, 1);
    assert_eq!(active_in(store, buttons.id).await, 1);
}

pub async fn count_matches_active_set_after_mixed_operations(store: &dyn CatalogStore) {
    let a = store.create_category(&new_category("Sections")).await.unwrap();
    let b = store.create_category(&new_category("Footers")).await.unwrap();

    let mut created = Vec::new();
    for i in 0..5 {
        let target = if i % 2 == 0 { a.id } else { b.id };
        created.push(
            store
                .create_component(&new_component(target, &format!("C{i}")))
                .await
                .unwrap(),
        );
    }
    store.delete_component(created[0].id).await.unwrap();
    store.delete_component(created[3].id).await.unwrap();
    store.delete_component(created[3].id).await.unwrap();

    for cat in [a.id, b.id] {
        assert_eq!(
            category(store, cat).await.component_count,
            active_in(store, cat).await,
            "count drifted for category {cat}"
        );
    }
    assert_eq!(category(store, a.id).await.component_count, 2);
    assert_eq!(category(store, b.id).await.component_count, 1);
}

pub async fn delete_semantics(store: &dyn CatalogStore) {
    let cat = store.create_category(&new_category("Buttons")).await.unwrap();
    let component = store
        .create_component(&new_component(cat.id, "Doomed"))
        .await
        .unwrap();

    assert!(!store.delete_component(component.id + 1000).await.unwrap());
    assert!(store.delete_component(component.id).await.unwrap());
    assert!(
        store.delete_component(component.id).await.unwrap(),
        "deleting an existing but inactive component still returns true"
    );

    let listed = store.components().await.unwrap();
    assert!(listed.iter().all(|c| c.id != component.id));
    assert!(store
        .components_by_category(cat.id)
        .await
        .unwrap()
        .is_empty());
    assert!(store.search_components("doomed").await.unwrap().is_empty());

    let fetched = store
        .component_by_id(component.id)
        .await
        .unwrap()
        .expect("soft-deleted component still resolves by id");
    assert!(!fetched.is_active);
    assert_eq!(category(store, cat.id).await.component_count, 0);
}

pub async fn search_semantics(store: &dyn CatalogStore) {
    let cat = store.create_category(&new_category("Buttons")).await.unwrap();
    let mut glass = new_component(cat.id, "Glass Button");
    glass.tags = Some(vec!["glassmorphism".into()]);
    let glass = store.create_component(&glass).await.unwrap();

    let mut neon = new_component(cat.id, "Neon Button");
    neon.description = Some("Cyberpunk GLOW".into());
    neon.tags = None;
    let neon = store.create_component(&neon).await.unwrap();

    let all = store.components().await.unwrap();
    let empty = store.search_components("").await.unwrap();
    assert_eq!(ids(&empty), ids(&all));

    let upper = store.search_components("GLASS").await.unwrap();
    let lower = store.search_components("glass").await.unwrap();
    assert_eq!(ids(&upper), ids(&lower));
    assert_eq!(ids(&upper), vec![glass.id]);

    let by_description = store.search_components("glow").await.unwrap();
    assert_eq!(ids(&by_description), vec![neon.id]);

    let by_tag = store.search_components("MORPH").await.unwrap();
    assert_eq!(ids(&by_tag), vec![glass.id]);

    assert!(store.search_components("slider").await.unwrap().is_empty());
}

pub async fn update_merges_fields_without_recount(store: &dyn CatalogStore) {
    let from = store.create_category(&new_category("Buttons")).await.unwrap();
    let to = store.create_category(&new_category("Headings")).await.unwrap();
    let component = store
        .create_component(&new_component(from.id, "Mover"))
        .await
        .unwrap();

    let updated = store
        .update_component(
            component.id,
            &UpdateComponent {
                name: Some("Moved".into()),
                category_id: Some(to.id),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("component exists");

    assert_eq!(updated.name, "Moved");
    assert_eq!(updated.category_id, to.id);
    assert_eq!(updated.html, component.html, "unsupplied fields are kept");
    assert_eq!(updated.description, component.description);
    assert!(updated.is_active);

    // Update does not recount: both cached counts are left as they were.
    assert_eq!(category(store, from.id).await.component_count, 1);
    assert_eq!(category(store, to.id).await.component_count, 0);
    assert_eq!(active_in(store, to.id).await, 1);

    let missing = store
        .update_component(component.id + 1000, &UpdateComponent::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

pub async fn update_clears_nullable_fields(store: &dyn CatalogStore) {
    let buttons = store.create_category(&new_category("Buttons")).await.unwrap();
    let component = store
        .create_component(&CreateComponent {
            description: Some("Glows".into()),
            tags: Some(vec!["neon".into()]),
            ..new_component(buttons.id, "Neon")
        })
        .await
        .unwrap();

    let kept = store
        .update_component(component.id, &UpdateComponent::default())
        .await
        .unwrap()
        .expect("component exists");
    assert_eq!(kept.description.as_deref(), Some("Glows"));
    assert_eq!(kept.tags, Some(vec!["neon".to_string()]));

    let cleared = store
        .update_component(
            component.id,
            &UpdateComponent {
                description: Some(None),
                tags: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("component exists");
    assert_eq!(cleared.description, None);
    assert_eq!(cleared.tags, None);

    let emptied = store
        .update_component(
            component.id,
            &UpdateComponent {
                description: Some(Some(String::new())),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("component exists");
    assert_eq!(emptied.description, None, "empty description is stored as absent");
}

pub async fn orphan_component_is_accepted(store: &dyn CatalogStore) {
    let created = store
        .create_component(&CreateComponent {
            name: "X".into(),
            description: None,
            html: String::new(),
            css: String::new(),
            js: String::new(),
            category_id: 999,
            tags: None,
        })
        .await
        .unwrap();

    assert_eq!(created.category_id, 999);
    assert!(store.category_by_id(999).await.unwrap().is_none());
    assert!(store.categories().await.unwrap().is_empty());
    assert_eq!(store.components_by_category(999).await.unwrap().len(), 1);
}

pub async fn manual_count_update(store: &dyn CatalogStore) {
    let cat = store.create_category(&new_category("Sliders")).await.unwrap();

    store.update_category_component_count(cat.id, 7).await.unwrap();
    assert_eq!(category(store, cat.id).await.component_count, 7);

    store.update_category_component_count(cat.id, 7).await.unwrap();
    assert_eq!(category(store, cat.id).await.component_count, 7);

    store
        .update_category_component_count(cat.id + 1000, 3)
        .await
        .unwrap();
    assert_eq!(store.categories().await.unwrap().len(), 1);
}
