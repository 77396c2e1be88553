//! Shared query parameter types for API handlers.

use catalog_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `GET /components` (`?search=&categoryId=`).
///
/// `search` wins over `categoryId` when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentListParams {
    pub search: Option<String>,
    pub category_id: Option<DbId>,
}
