pub mod category;
pub mod component;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                          list, create
/// /categories/{id}                     get
/// /categories/{id}/components          active components in category
///
/// /components                          list (search / category filter), create
/// /components/{id}                     get, update, soft delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/components", component::router())
}
