//! Item filtering for the search box.
//!
//! Matching is case-insensitive substring containment. The filter is stable:
//! matching items keep their original order, nothing is re-sorted.

use crate::model::{DisplayItem, Page};

/// Whether `title` contains `query`, ignoring case.
///
/// An empty query matches every title.
pub fn matches_query(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Filter a page's items by `query` and map them to display items.
///
/// The query is used as given; no trimming or other normalization happens
/// beyond case folding.
pub fn filter_items(page: &Page, query: &str) -> Vec<DisplayItem> {
    if query.is_empty() {
        return page.display_items();
    }

    page.items()
        .iter()
        .filter(|title| matches_query(title, query))
        .map(|title| DisplayItem::new(title.clone(), page.image().clone()))
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
