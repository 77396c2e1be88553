//! Component (UI snippet) model.

use catalog_core::search::SearchQuery;
use catalog_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `components` table.
///
/// `html`, `css` and `js` hold the literal payload of the snippet. Deleting a
/// component only clears `is_active`; the row stays addressable by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub html: String,
    pub css: String,
    pub js: String,
    pub category_id: DbId,
    pub tags: Option<Vec<String>>,
    pub is_active: bool,
}

/// Soft-delete state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Active,
    Deleted,
}

impl Component {
    pub fn activity(&self) -> Activity {
        if self.is_active {
            Activity::Active
        } else {
            Activity::Deleted
        }
    }

    /// Whether this component is visible in listings and search.
    pub fn is_listed(&self) -> bool {
        match self.activity() {
            Activity::Active => true,
            Activity::Deleted => false,
        }
    }

    /// Substring match over name, description and tags.
    pub fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_fields(&self.name, self.description.as_deref(), self.tags.as_deref())
    }

    /// Apply the supplied fields of a partial update in place.
    pub fn apply(&mut self, update: &UpdateComponent) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = update.normalized_description() {
            self.description = description;
        }
        if let Some(html) = &update.html {
            self.html = html.clone();
        }
        if let Some(css) = &update.css {
            self.css = css.clone();
        }
        if let Some(js) = &update.js {
            self.js = js.clone();
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(tags) = &update.tags {
            self.tags = tags.clone();
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}

/// DTO for creating a new component.
///
/// `html`, `css` and `js` are required but may be empty.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComponent {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub html: String,
    pub css: String,
    pub js: String,
    pub category_id: DbId,
    #[validate(length(max = 50, message = "at most 50 tags are allowed"))]
    pub tags: Option<Vec<String>>,
}

impl CreateComponent {
    /// Description with empty strings folded into `None`.
    pub fn normalized_description(&self) -> Option<String> {
        self.description.clone().filter(|d| !d.is_empty())
    }
}

/// DTO for a partial component update. Only `Some` fields are merged.
///
/// `description` and `tags` use `Option<Option<_>>`: an absent field keeps
/// the stored value, an explicit JSON `null` clears it.
///
/// Changing `category_id` or `is_active` here does not recompute any
/// category's `component_count`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComponent {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub js: Option<String>,
    pub category_id: Option<DbId>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 50, message = "at most 50 tags are allowed"))]
    pub tags: Option<Option<Vec<String>>>,
    pub is_active: Option<bool>,
}

impl UpdateComponent {
    /// The description change, if any, with empty strings folded into a clear.
    pub fn normalized_description(&self) -> Option<Option<String>> {
        self.description
            .as_ref()
            .map(|d| d.clone().filter(|d| !d.is_empty()))
    }
}

/// Marks a field that appeared in the JSON body as `Some`, even when its
/// value is `null`. Absent fields fall back to `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
