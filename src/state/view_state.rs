//! View state and its pure transition function.
//!
//! `ViewState` is the single source of truth for what is visible. Every
//! transition produces a complete new value, so the derived `visible_items`
//! can never drift from `(current_page, search_query)`.

use crate::catalog::PageCatalog;
use crate::model::{compute_statistics, DisplayItem, Page, StateError, Statistics};
use crate::state::search::filter_items;
use serde::Serialize;

// ===== Command =====

/// A request to change the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to another page. Clears any active search.
    ///
    /// Signed and wider than `usize` so that a caller-side `-1` or any
    /// `usize` is reported exactly when out of range.
    SetCurrentPage(i128),
    /// Replace the search query and refilter the current page.
    SetSearchQuery(String),
}

// ===== ViewState =====

/// Current page, search query and the items they select.
///
/// # Invariants
///
/// - `current_page < catalog.page_count()`
/// - `visible_items` equals the case-insensitive substring filter of the
///   current page's items by `search_query`, in original order, each paired
///   with the page's image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    #[serde(skip)]
    catalog: PageCatalog,
    current_page: usize,
    search_query: String,
    visible_items: Vec<DisplayItem>,
}

impl ViewState {
    /// Initial state: page 0, empty query, every item of page 0 visible.
    pub fn new(catalog: PageCatalog) -> Self {
        let visible_items = catalog.pages()[0].display_items();
        Self {
            catalog,
            current_page: 0,
            search_query: String::new(),
            visible_items,
        }
    }

    /// Initial state from raw pages.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EmptyCatalog`] if `pages` is empty.
    pub fn initialize(pages: Vec<Page>) -> Result<Self, StateError> {
        PageCatalog::load(pages)
            .map(Self::new)
            .map_err(|_| StateError::EmptyCatalog)
    }

    /// Apply `command`, returning the next state.
    ///
    /// `self` is never modified; on error the caller keeps the old state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::IndexOutOfRange`] for a page index outside
    /// `[0, page_count)`.
    pub fn apply(&self, command: Command) -> Result<Self, StateError> {
        match command {
            Command::SetCurrentPage(index) => self.with_page(index),
            Command::SetSearchQuery(query) => Ok(self.with_query(query)),
        }
    }

    fn with_page(&self, index: i128) -> Result<Self, StateError> {
        let out_of_range = || StateError::IndexOutOfRange {
            index,
            page_count: self.catalog.page_count(),
        };

        let current_page = usize::try_from(index).map_err(|_| out_of_range())?;
        let page = self.catalog.page(current_page).ok_or_else(out_of_range)?;

        Ok(Self {
            catalog: self.catalog.clone(),
            current_page,
            search_query: String::new(),
            visible_items: page.display_items(),
        })
    }

    pub(crate) fn with_query(&self, search_query: String) -> Self {
        let visible_items = filter_items(self.page(), &search_query);
        Self {
            catalog: self.catalog.clone(),
            current_page: self.current_page,
            search_query,
            visible_items,
        }
    }

    /// Statistics for the visible items. Pure read.
    pub fn statistics(&self) -> Statistics {
        compute_statistics(&self.visible_items, self.current_page)
    }

    /// The catalog the state was built from.
    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    /// All pages in order.
    pub fn pages(&self) -> &[Page] {
        self.catalog.pages()
    }

    /// The current page.
    pub fn page(&self) -> &Page {
        &self.catalog.pages()[self.current_page]
    }

    /// Index of the current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The active search query, empty when no filter is applied.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Items currently shown, filtered and in page order.
    pub fn visible_items(&self) -> &[DisplayItem] {
        &self.visible_items
    }
}
