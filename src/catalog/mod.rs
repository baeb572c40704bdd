//! Page catalog: the read-only collection of pages.
//!
//! The catalog is populated once at startup, either from the bundled sample
//! data or from a TOML/JSON file, and is immutable afterwards. Cloning a
//! catalog shares the underlying pages.

mod sample;

pub use sample::sample_pages;

use crate::model::{CatalogError, Page};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// On-disk catalog layout.
///
/// ```toml
/// [[pages]]
/// image = "image1"
/// image_url = "https://cdn.example.com/orchard.png"  # optional
/// items = ["apple", "banana"]
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    pages: Vec<Page>,
}

/// Immutable, non-empty, ordered collection of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCatalog {
    pages: Arc<[Page]>,
}

impl PageCatalog {
    /// Build a catalog from already-loaded pages.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if `pages` is empty.
    pub fn load(pages: Vec<Page>) -> Result<Self, CatalogError> {
        if pages.is_empty() {
            return Err(CatalogError::Empty);
        }

        info!(page_count = pages.len(), "Catalog loaded");

        Ok(Self {
            pages: Arc::from(pages),
        })
    }

    /// The bundled five-page sample catalog.
    pub fn sample() -> Self {
        Self {
            pages: Arc::from(sample_pages()),
        }
    }

    /// Load a catalog file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not match the
    /// catalog layout, or contains no pages.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str::<CatalogFile>(&contents).map_err(|e| e.to_string())
        } else {
            toml::from_str::<CatalogFile>(&contents).map_err(|e| e.to_string())
        };

        let file = parsed.map_err(|reason| CatalogError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;

        info!(path = %path.display(), "Catalog file parsed");
        Self::load(file.pages)
    }

    /// All pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The page at `index`, if it exists.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Number of pages. Always at least one.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
