//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::category::CreateCategory;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.store.categories().await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let category = state.store.create_category(&input).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = state
        .store
        .category_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(DataResponse { data: category }))
}

/// GET /api/v1/categories/{id}/components
///
/// Active components in the category. An unknown category yields an empty
/// list, matching the store contract.
pub async fn list_components(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let components = state.store.components_by_category(id).await?;
    Ok(Json(DataResponse { data: components }))
}
