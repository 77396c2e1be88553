//! Handlers for the `/components` resource.
//!
//! Deleting is a soft delete: the component disappears from listings and
//! search but stays reachable through `GET /components/{id}`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::component::{CreateComponent, UpdateComponent};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::ComponentListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Component",
        id,
    })
}

/// GET /api/v1/components?search=&categoryId=
///
/// A non-empty `search` takes precedence, then `categoryId`; with neither,
/// all active components are returned.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ComponentListParams>,
) -> AppResult<impl IntoResponse> {
    let components = match (params.search.as_deref(), params.category_id) {
        (Some(search), _) if !search.is_empty() => state.store.search_components(search).await?,
        (_, Some(category_id)) => state.store.components_by_category(category_id).await?,
        _ => state.store.components().await?,
    };
    Ok(Json(DataResponse { data: components }))
}

/// POST /api/v1/components
///
/// The referenced category is not required to exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateComponent>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let component = state.store.create_component(&input).await?;
    tracing::info!(
        component_id = component.id,
        category_id = component.category_id,
        "Component created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: component })))
}

/// GET /api/v1/components/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let component = state
        .store
        .component_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: component }))
}

/// PUT /api/v1/components/{id}
///
/// Partial update: only supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComponent>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let component = state
        .store
        .update_component(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    if input.category_id.is_some() || input.is_active.is_some() {
        tracing::warn!(
            component_id = id,
            "Component category or activity changed by update; category counts not recomputed",
        );
    }

    Ok(Json(DataResponse { data: component }))
}

/// DELETE /api/v1/components/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if state.store.delete_component(id).await? {
        tracing::info!(component_id = id, "Component deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
