//! Category model.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
///
/// `component_count` is a denormalized cache of the number of active
/// components whose `category_id` is this category. Stores recompute it on
/// every component create and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub icon: String,
    pub description: Option<String>,
    pub component_count: i64,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "icon must be 1-100 characters"))]
    pub icon: String,
    pub description: Option<String>,
}

impl CreateCategory {
    /// Description with empty strings folded into `None`.
    pub fn normalized_description(&self) -> Option<String> {
        self.description.clone().filter(|d| !d.is_empty())
    }
}
