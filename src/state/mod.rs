//! View-state engine (pure core plus the owning store).
//!
//! All state transitions are pure functions testable without any UI.

pub mod search;
pub mod store;
pub mod view_state;

// Re-export for convenience
pub use search::{filter_items, matches_query};
pub use store::{Subscription, ViewStateStore};
pub use view_state::{Command, ViewState};
