//! In-memory search page bound to the `#search`, `#results` and `#noresults`
//! elements, rendered with maud.

use maud::{html, Markup, Render, DOCTYPE};

use super::{ResultRow, SearchView};
use super::{NO_RESULTS_ID, RESULTS_ID, SEARCH_INPUT_ID};

const DEFAULT_TITLE: &str = "Redirects";

/// `style` of an element; hidden elements get `display: none`.
fn display_style(visible: bool) -> Option<&'static str> {
    (!visible).then_some("display: none")
}

impl Render for ResultRow {
    fn render(&self) -> Markup {
        html! {
            tr {
                td class="url" {
                    input type="text" size="30" value=(self.short_url) readonly;
                }
                td class="target" {
                    a href=(self.target) target="_blank" title=(self.title()) { "Target" }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    title: String,
    search_value: Option<String>,
    results_visible: bool,
    no_results_visible: bool,
    rows: Vec<ResultRow>,
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl HtmlPage {
    /// Fresh page: results shown and empty, "no results" hidden.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            search_value: None,
            results_visible: true,
            no_results_visible: false,
            rows: Vec::new(),
        }
    }

    pub fn search_value(&self) -> Option<&str> {
        self.search_value.as_deref()
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn no_results_visible(&self) -> bool {
        self.no_results_visible
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for HtmlPage {
    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                }
                body {
                    form method="get" {
                        input type="search" id=(SEARCH_INPUT_ID) name="search" value=[self.search_value.as_deref()];
                    }
                    table {
                        tbody id=(RESULTS_ID) style=[display_style(self.results_visible)] {
                            @for row in &self.rows {
                                (row.render())
                            }
                        }
                    }
                    p id=(NO_RESULTS_ID) style=[display_style(self.no_results_visible)] { "No results" }
                }
            }
        }
    }
}

impl SearchView for HtmlPage {
    fn set_search_value(&mut self, value: Option<&str>) {
        self.search_value = value.map(str::to_string);
    }

    fn hide_results(&mut self) {
        self.results_visible = false;
    }

    fn show_no_results(&mut self) {
        self.no_results_visible = true;
    }

    fn append_row(&mut self, row: ResultRow) {
        self.rows.push(row);
    }
}
