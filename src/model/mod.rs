//! Domain model types (pure).
//!
//! Pages, display items, statistics and the error taxonomy.

pub mod error;
pub mod page;
pub mod stats;

// Re-export for convenience
pub use error::{AppError, CatalogError, StateError};
pub use page::{DisplayItem, ImageRef, Page};
pub use stats::{compute_statistics, CharCount, Statistics, TOP_CHARACTER_LIMIT};
