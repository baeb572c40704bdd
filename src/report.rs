//! Plain-text and JSON rendering of view and statistics snapshots.
//!
//! This is the CLI's presentation boundary: it reads snapshots and never
//! touches the store.

use crate::model::Statistics;
use crate::state::ViewState;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

/// How snapshots are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// One JSON object per snapshot.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    page_count: usize,
    view: &'a ViewState,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<&'a Statistics>,
}

/// Render the view, optionally followed by statistics.
///
/// # Errors
///
/// Only JSON encoding can fail.
pub fn render(
    view: &ViewState,
    statistics: Option<&Statistics>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => {
            let mut out = render_view_text(view);
            if let Some(stats) = statistics {
                out.push('\n');
                out.push_str(&render_statistics_text(stats));
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string(&Report {
            page_count: view.catalog().page_count(),
            view,
            statistics,
        }),
    }
}

/// Human-readable listing of the visible items.
pub fn render_view_text(view: &ViewState) -> String {
    let mut out = String::new();
    let page = view.page();

    let _ = writeln!(
        out,
        "Page {}/{} [{}]",
        view.current_page() + 1,
        view.catalog().page_count(),
        page.image()
    );
    if view.search_query().is_empty() {
        out.push_str("Search: (none)\n");
    } else {
        let _ = writeln!(out, "Search: {:?}", view.search_query());
    }
    let _ = writeln!(
        out,
        "Showing {} of {} items",
        view.visible_items().len(),
        page.items().len()
    );
    for item in view.visible_items() {
        let _ = writeln!(out, "  - {}", item.title);
    }

    out
}

/// Human-readable statistics panel.
pub fn render_statistics_text(stats: &Statistics) -> String {
    let letters = if stats.top_characters.is_empty() {
        "(none)".to_string()
    } else {
        stats
            .top_characters
            .iter()
            .map(|c| format!("{}={}", c.character, c.count))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Statistics for page {}\nItems: {}\nTop letters: {}\n",
        stats.page_index + 1,
        stats.item_count,
        letters
    )
}
