//! Search and category predicates over catalog records.
//!
//! All matching is case-insensitive substring matching: `"ai"` matches
//! `"blockchain"`. Results keep the source order and never duplicate items.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use super::mapping::CategoryMap;
use super::state::ALL_FILTER;

/// A record shown on a filterable catalog page.
pub trait CatalogItem {
    /// Stable identifier, unique within its list.
    fn id(&self) -> u32;

    /// Display name or title. Searched.
    fn title(&self) -> &str;

    /// Searched.
    fn description(&self) -> &str;

    /// Tags or topics in display order. Searched and used for category matching.
    fn tags(&self) -> &[&str];

    /// Language or type field compared directly against the selected label.
    fn kind(&self) -> Option<&str> {
        None
    }
}

/// True when the lowercase `needle` occurs in the title, the description, or
/// any tag. An empty needle matches everything.
pub fn matches_search<T: CatalogItem + ?Sized>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.title().to_lowercase().contains(needle)
        || item.description().to_lowercase().contains(needle)
        || item.tags().iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// True when `item` belongs to the category named by `selected`.
///
/// `"All"` accepts everything. Otherwise the item's kind must contain the
/// label, or one of its tags must contain a substring mapped to the label.
pub fn matches_category<T: CatalogItem + ?Sized>(item: &T, selected: &str, map: &CategoryMap) -> bool {
    if selected == ALL_FILTER {
        return true;
    }

    let label = selected.to_lowercase();
    if item.kind().is_some_and(|kind| kind.to_lowercase().contains(&label)) {
        return true;
    }

    let relevant = map.relevant(selected);
    if relevant.is_empty() {
        return false;
    }
    item.tags().iter().any(|tag| {
        let tag = tag.to_lowercase();
        relevant.iter().any(|sub| tag.contains(&sub.to_lowercase()))
    })
}

/// Filter `items` by search term and selected category.
///
/// Pure: the same inputs always produce the same subsequence of `items`.
pub fn filter<'a, T: CatalogItem>(
    items: &'a [T],
    search_term: &str,
    selected_filter: &str,
    map: &CategoryMap,
) -> Vec<&'a T> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_search(*item, &needle) && matches_category(*item, selected_filter, map))
        .collect()
}

/// Position of `item` in the full `items` list, matched by id.
///
/// Keyed card grids use this for stagger delays, so a card keeps the same
/// delay whichever subset is visible.
#[must_use]
pub fn source_index<T: CatalogItem>(items: &[T], item: &T) -> usize {
    items.iter().position(|candidate| candidate.id() == item.id()).unwrap_or_default()
}

/// Options for the category selector: `"All"` first, then the mapped labels.
#[must_use]
pub fn filter_labels(map: &CategoryMap) -> Vec<&'static str> {
    std::iter::once(ALL_FILTER).chain(map.labels()).collect()
}
