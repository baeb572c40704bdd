//! Error types for the carousel list core.
//!
//! Errors follow a small hierarchy built with `thiserror`:
//!
//! - [`AppError`] - top-level error for the binary
//!   - [`CatalogError`] - catalog could not be loaded or is empty
//!   - [`StateError`] - a command violated the store's contract
//!   - [`ConfigError`](crate::config::ConfigError) - config file problems
//!   - [`LoggingError`](crate::logging::LoggingError) - subscriber setup
//!
//! `EmptyCatalog` and `IndexOutOfRange` are programming-contract
//! violations. They propagate immediately and are never clamped or
//! defaulted. Nothing here is retryable.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for the `carousel` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// The page catalog could not be loaded.
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// A store command was rejected.
    #[error("Command rejected: {0}")]
    State(#[from] StateError),

    /// The configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Reading commands or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot could not be encoded as JSON.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading a page catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The source supplied zero pages.
    ///
    /// Page-index arithmetic is undefined for an empty catalog, so this is
    /// rejected at load time rather than at first use.
    #[error("Catalog contains no pages")]
    Empty,

    /// The catalog file could not be read.
    #[error("Failed to read catalog at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// The catalog file is not valid TOML or JSON for the catalog schema.
    #[error("Invalid catalog in {path}: {reason}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// Contract violations reported by the view-state store.
///
/// A command that fails with one of these leaves the state unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The store was initialized with zero pages.
    #[error("Cannot initialize view state from an empty catalog")]
    EmptyCatalog,

    /// A page index outside `[0, page_count)` was requested.
    #[error("Page index {index} out of range (catalog has {page_count} pages)")]
    IndexOutOfRange {
        /// The requested index, possibly negative. Wide enough to hold any
        /// `usize` or `i64` exactly.
        index: i128,
        /// Number of pages in the catalog.
        page_count: usize,
    },
}
