//! Output side of the search view.
//!
//! [`SearchView`] is the bound set of elements the pipeline writes to: the
//! search input, the results table body and the "no results" indicator.

mod html;

pub use html::HtmlPage;

use serde::Serialize;

use crate::entry::RedirectEntry;
use crate::error::SearchError;

/// Element ids the page must expose.
pub const SEARCH_INPUT_ID: &str = "search";
pub const RESULTS_ID: &str = "results";
pub const NO_RESULTS_ID: &str = "noresults";

/// One rendered result: the short link and where it points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// `https://<host>/<name>`, shown in a read-only text field.
    pub short_url: String,
    /// Link destination, opened in a new browsing context.
    pub target: String,
}

impl ResultRow {
    /// Row for the entry at `index`; fails only for a `null` element.
    pub fn for_entry(entry: &RedirectEntry, index: usize, host: &str) -> Result<Self, SearchError> {
        let name = entry.name_text(index)?;
        Ok(Self {
            short_url: format!("https://{}/{}", host, name),
            target: entry.target_text(index)?,
        })
    }

    /// Link title, e.g. `Go to https://example.com/docs`.
    pub fn title(&self) -> String {
        format!("Go to {}", self.target)
    }
}

pub trait SearchView {
    /// Reflects the incoming term in the search field; `None` clears it.
    fn set_search_value(&mut self, value: Option<&str>);
    fn hide_results(&mut self);
    fn show_no_results(&mut self);
    fn append_row(&mut self, row: ResultRow);
}

/// Writes `entries` into `view`: one row each, or the empty-state toggle.
///
/// Rows are appended one by one; an unreadable entry stops rendering there and
/// the rows before it stay. Returns the number of rows appended.
pub fn render_results<V: SearchView + ?Sized>(
    view: &mut V,
    entries: &[RedirectEntry],
    host: &str,
) -> Result<usize, SearchError> {
    if entries.is_empty() {
        view.hide_results();
        view.show_no_results();
        return Ok(0);
    }
    for (index, entry) in entries.iter().enumerate() {
        view.append_row(ResultRow::for_entry(entry, index, host)?);
    }
    Ok(entries.len())
}
