//! Per-page filter inputs.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use super::filter::{CatalogItem, filter};
use super::mapping::CategoryMap;

/// Sentinel label that disables category filtering.
pub const ALL_FILTER: &str = "All";

/// Search term and selected category for one catalog view.
///
/// Owned by the page that renders the catalog. Never persisted, so a reload
/// starts from the default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub selected_filter: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { search_term: String::new(), selected_filter: ALL_FILTER.to_owned() }
    }
}

impl FilterState {
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_filter(&mut self, label: impl Into<String>) {
        self.selected_filter = label.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when neither input narrows the catalog.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty() && self.selected_filter == ALL_FILTER
    }

    #[must_use]
    pub fn apply<'a, T: CatalogItem>(&self, items: &'a [T], map: &CategoryMap) -> Vec<&'a T> {
        filter(items, &self.search_term, &self.selected_filter, map)
    }
}
