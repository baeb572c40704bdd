//! The view-state store.
//!
//! `ViewStateStore` owns the single `ViewState` and is the only way to
//! change it. Commands run synchronously to completion and either fully
//! apply or leave the state untouched. The store is single-threaded: a host
//! that receives input on several threads must serialize commands before
//! they reach it.

use crate::catalog::PageCatalog;
use crate::model::{Page, StateError, Statistics};
use crate::state::view_state::{Command, ViewState};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

type Subscriber = Rc<dyn Fn(&ViewState)>;

/// Owner of the view state.
pub struct ViewStateStore {
    state: ViewState,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl std::fmt::Debug for ViewStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewStateStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl ViewStateStore {
    /// Create a store showing every item of page 0.
    pub fn new(catalog: PageCatalog) -> Self {
        Self {
            state: ViewState::new(catalog),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Create a store from raw pages.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EmptyCatalog`] if `pages` is empty.
    pub fn initialize(pages: Vec<Page>) -> Result<Self, StateError> {
        let state = ViewState::initialize(pages)?;
        Ok(Self {
            state,
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    /// Switch to page `page_index`, clearing the search query.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::IndexOutOfRange`] if the page does not exist.
    /// The state is unchanged in that case.
    pub fn set_current_page(&mut self, page_index: usize) -> Result<&ViewState, StateError> {
        // usize is at most 64 bits wide, so the widening is lossless.
        self.dispatch(Command::SetCurrentPage(page_index as i128))
    }

    /// Replace the search query and refilter the current page.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> &ViewState {
        let next = self.state.with_query(query.into());
        self.commit(next)
    }

    /// Apply any command.
    ///
    /// Subscribers are notified after a successful command only.
    ///
    /// # Errors
    ///
    /// Propagates the transition's [`StateError`]; the state is unchanged.
    pub fn dispatch(&mut self, command: Command) -> Result<&ViewState, StateError> {
        match self.state.apply(command.clone()) {
            Ok(next) => Ok(self.commit(next)),
            Err(err) => {
                warn!(?command, error = %err, "Command rejected");
                Err(err)
            }
        }
    }

    fn commit(&mut self, next: ViewState) -> &ViewState {
        self.state = next;

        debug!(
            page = self.state.current_page(),
            query = self.state.search_query(),
            visible = self.state.visible_items().len(),
            "View state updated"
        );

        self.notify();
        &self.state
    }

    fn notify(&self) {
        // Clone the list so a callback may subscribe or unsubscribe.
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(&self.state);
        }
    }

    /// Statistics for the visible items. Does not change the state.
    pub fn statistics(&self) -> Statistics {
        self.state.statistics()
    }

    /// Register `callback` to run after every successful command.
    ///
    /// The callback stays registered until the returned [`Subscription`]
    /// is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&ViewState) + 'static) -> Subscription {
        let subscriber: Subscriber = Rc::new(callback);
        self.subscribers.borrow_mut().push(Rc::clone(&subscriber));
        Subscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    /// The current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The catalog backing the store.
    pub fn catalog(&self) -> &PageCatalog {
        self.state.catalog()
    }

    /// Number of pages in the catalog.
    pub fn page_count(&self) -> usize {
        self.state.catalog().page_count()
    }
}

/// Handle for a registered subscriber. Dropping it unsubscribes.
pub struct Subscription {
    subscriber: Subscriber,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
