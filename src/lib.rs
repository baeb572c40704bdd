//! Carousel List
//!
//! Reactive view-state engine for a carousel of pages, each with a
//! searchable item list and a letter-frequency statistics panel.
//!
//! The core is pure: [`state::ViewState::apply`] turns a state and a
//! [`state::Command`] into the next state, and [`state::ViewStateStore`]
//! owns the one live instance. Rendering is left to the host; the
//! [`report`] and [`shell`] modules are the thin text front end used by the
//! `carousel` binary.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod report;
pub mod shell;
pub mod state;

pub use catalog::PageCatalog;
pub use model::{AppError, CatalogError, DisplayItem, ImageRef, Page, StateError, Statistics};
pub use state::{Command, ViewState, ViewStateStore};
