//! Component search matching.
//!
//! Lives in `core` so the in-memory and PostgreSQL stores apply the exact
//! same rule: a case-insensitive substring match, no ranking.

/// A lowercased search needle.
///
/// An empty needle matches every candidate text (every string contains the
/// empty string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Build a query from raw user input. No trimming is applied.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// The normalized (lowercased) needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive substring test against a single text.
    pub fn matches_text(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    /// Match against the searchable fields of a component.
    ///
    /// Absent description or tags never match on their own, but the name is
    /// always considered.
    pub fn matches_fields(
        &self,
        name: &str,
        description: Option<&str>,
        tags: Option<&[String]>,
    ) -> bool {
        self.matches_text(name)
            || description.is_some_and(|d| self.matches_text(d))
            || tags.is_some_and(|tags| tags.iter().any(|t| self.matches_text(t)))
    }
}
