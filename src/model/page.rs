//! Page and display item value types.
//!
//! Pages are immutable once loaded. Display items are derived on every
//! recomputation of the view state and never mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ===== ImageRef =====

/// Opaque image handle resolved by the presentation layer.
///
/// The core never interprets or loads image bytes; it only carries the
/// handle from a page to every display item derived from it. Cloning is
/// cheap (shared string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    /// Wrap a raw handle (resource name, asset key, ...).
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(Arc::from(raw.as_ref()))
    }

    /// The raw handle as given at construction.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Page =====

/// A group of item titles sharing one representative image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page {
    /// Local image handle shown for the page and each of its items.
    image: ImageRef,

    /// Optional remote image location, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,

    /// Item titles in display order.
    items: Vec<String>,
}

impl Page {
    /// Create a page from an image handle and its item titles.
    pub fn new<I, S>(image: ImageRef, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            image,
            image_url: None,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach a remote image location.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// The page's image handle.
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// The page's remote image location, if any.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Item titles in display order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Map every item title to a display item carrying this page's image.
    pub fn display_items(&self) -> Vec<DisplayItem> {
        self.items
            .iter()
            .map(|title| DisplayItem::new(title.clone(), self.image.clone()))
            .collect()
    }
}

// ===== DisplayItem =====

/// A title paired with an image handle, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DisplayItem {
    /// Item title exactly as stored on the page.
    pub title: String,
    /// Image handle of the owning page.
    pub image: ImageRef,
}

impl DisplayItem {
    /// Create a display item.
    pub fn new(title: impl Into<String>, image: ImageRef) -> Self {
        Self {
            title: title.into(),
            image,
        }
    }
}
