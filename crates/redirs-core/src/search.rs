//! The search pipeline: location → term → fetch → filter → render.

use std::sync::Arc;

use crate::entry::{parse_entries, RedirectEntry};
use crate::error::SearchError;
use crate::fetch::{Fetcher, REDIRECTS_RESOURCE};
use crate::filter::filter_entries;
use crate::location::PageLocation;
use crate::view::{render_results, SearchView};

/// How a search run ended.
#[derive(Debug)]
pub enum Completion {
    /// Rows were appended to the results table.
    Rendered(usize),
    /// Nothing matched; the empty state is showing.
    NoResults,
    /// Fetch, decode, filter or row rendering failed and was logged. The view
    /// keeps its search value and any rows appended before the failure;
    /// results visibility is untouched.
    Failed(SearchError),
}

impl Completion {
    pub fn is_failed(&self) -> bool {
        matches!(self, Completion::Failed(_))
    }

    pub fn rows(&self) -> usize {
        match self {
            Completion::Rendered(n) => *n,
            _ => 0,
        }
    }
}

/// Options of a single run.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Resource path resolved against the page location.
    pub resource: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            resource: REDIRECTS_RESOURCE.to_string(),
        }
    }
}

/// Fetches the redirects resource for `location` on the blocking pool and
/// decodes it.
pub async fn load_entries(
    location: &PageLocation,
    fetcher: Arc<dyn Fetcher>,
    opts: &SearchOptions,
) -> Result<Vec<RedirectEntry>, SearchError> {
    let url = location.resolve(&opts.resource)?;
    tracing::debug!(%url, "fetching redirects");
    let fetched = tokio::task::spawn_blocking(move || fetcher.fetch(&url)).await??;
    let entries = parse_entries(&fetched.body)?;
    tracing::debug!(count = entries.len(), "decoded redirects");
    Ok(entries)
}

/// Runs one search against `location`, writing into `view`.
///
/// Never returns an error: failures are logged and reported as
/// [`Completion::Failed`].
pub async fn initialize<V: SearchView + ?Sized>(
    location: &PageLocation,
    fetcher: Arc<dyn Fetcher>,
    view: &mut V,
    opts: &SearchOptions,
) -> Completion {
    let term = location.query_params().search_term();
    view.set_search_value(term.as_deref());

    match run(location, fetcher, view, opts, term.as_deref()).await {
        Ok(0) => Completion::NoResults,
        Ok(n) => Completion::Rendered(n),
        Err(err) => {
            tracing::error!(error = %err, page = %location.url(), "redirect search failed");
            Completion::Failed(err)
        }
    }
}

async fn run<V: SearchView + ?Sized>(
    location: &PageLocation,
    fetcher: Arc<dyn Fetcher>,
    view: &mut V,
    opts: &SearchOptions,
    term: Option<&str>,
) -> Result<usize, SearchError> {
    let entries = load_entries(location, fetcher, opts).await?;
    let results = filter_entries(entries, term)?;
    tracing::info!(term = ?term, matched = results.len(), "search complete");
    render_results(view, &results, &location.host())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::fetch::FetchedBody;
    use crate::view::HtmlPage;
    use std::sync::Mutex;
    use url::Url;

    const DATASET: &str = r#"[{"name":"docs","target":"https://example.com/docs"},{"name":"old-page","target":"new-page"}]"#;

    /// Serves a canned response and records requested URLs.
    struct StubFetcher {
        response: Result<Vec<u8>, u32>,
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn ok(body: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(body.as_bytes().to_vec()),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn status(code: u32) -> Arc<Self> {
            Arc::new(Self {
                response: Err(code),
                requested: Mutex::new(Vec::new()),
            })
        }
    }

    impl Fetcher for StubFetcher {
        fn fetch(&self, url: &Url) -> Result<FetchedBody, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            match &self.response {
                Ok(body) => Ok(FetchedBody {
                    status: 200,
                    body: body.clone(),
                }),
                Err(code) => Err(FetchError::Status(*code)),
            }
        }
    }

    async fn search(page: &str, fetcher: Arc<StubFetcher>) -> (Completion, HtmlPage) {
        let loc = PageLocation::parse(page).unwrap();
        let mut view = HtmlPage::default();
        let done = initialize(&loc, fetcher, &mut view, &SearchOptions::default()).await;
        (done, view)
    }

    #[tokio::test]
    async fn no_term_renders_everything() {
        let (done, view) = search("https://lpsmods.dev/", StubFetcher::ok(DATASET)).await;
        assert_eq!(done.rows(), 2);
        assert_eq!(view.search_value(), None);
        assert_eq!(view.rows()[0].short_url, "https://lpsmods.dev/docs");
        assert_eq!(view.rows()[1].short_url, "https://lpsmods.dev/old-page");
        assert_eq!(view.rows()[1].target, "new-page");
    }

    #[tokio::test]
    async fn term_is_lowercased_and_reflected() {
        let (done, view) = search("https://lpsmods.dev/?search=OLD", StubFetcher::ok(DATASET)).await;
        assert!(matches!(done, Completion::Rendered(1)));
        assert_eq!(view.search_value(), Some("old"));
        assert_eq!(view.rows()[0].short_url, "https://lpsmods.dev/old-page");
    }

    #[tokio::test]
    async fn term_matches_hyphen_replaced_target() {
        let (done, view) = search("https://lpsmods.dev/?search=new", StubFetcher::ok(DATASET)).await;
        assert_eq!(done.rows(), 1);
        assert_eq!(view.rows()[0].target, "new-page");
    }

    #[tokio::test]
    async fn no_match_shows_empty_state() {
        let (done, view) = search("https://lpsmods.dev/?search=zzz", StubFetcher::ok(DATASET)).await;
        assert!(matches!(done, Completion::NoResults));
        assert!(!view.results_visible());
        assert!(view.no_results_visible());
        assert!(view.rows().is_empty());
    }

    #[tokio::test]
    async fn http_error_leaves_visibility_untouched() {
        let (done, view) = search("https://lpsmods.dev/?search=docs", StubFetcher::status(404)).await;
        match done {
            Completion::Failed(SearchError::Fetch(e)) => assert_eq!(e.status(), Some(404)),
            other => panic!("expected fetch failure, got {other:?}"),
        }
        assert_eq!(view.search_value(), Some("docs"));
        assert!(view.results_visible());
        assert!(!view.no_results_visible());
        assert!(view.rows().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_fails() {
        let (done, view) = search("https://lpsmods.dev/", StubFetcher::ok("<html>")).await;
        assert!(matches!(done, Completion::Failed(SearchError::Decode(_))));
        assert!(view.rows().is_empty());
    }

    #[tokio::test]
    async fn missing_field_fails_only_when_filtering() {
        let body = r#"[{"name":"x"}]"#;
        let (done, _) = search("https://h/?search=zz", StubFetcher::ok(body)).await;
        assert!(matches!(
            done,
            Completion::Failed(SearchError::MalformedEntry { index: 0, field: "target" })
        ));
        let (done, view) = search("https://h/", StubFetcher::ok(body)).await;
        assert_eq!(done.rows(), 1);
        assert_eq!(view.rows()[0].target, "undefined");
    }

    #[tokio::test]
    async fn loosely_typed_entries_render_without_term() {
        let body = r#"[{"name":5,"target":"https://x/"},7,{"name":"a","target":null}]"#;
        let (done, view) = search("https://h/", StubFetcher::ok(body)).await;
        assert_eq!(done.rows(), 3);
        assert_eq!(view.rows()[0].short_url, "https://h/5");
        assert_eq!(view.rows()[1].short_url, "https://h/undefined");
        assert_eq!(view.rows()[2].target, "null");
    }

    #[tokio::test]
    async fn null_element_fails_after_earlier_rows() {
        let body = r#"[{"name":"a","target":"https://a/"},null]"#;
        let (done, view) = search("https://h/", StubFetcher::ok(body)).await;
        assert!(matches!(
            done,
            Completion::Failed(SearchError::MalformedEntry { index: 1, field: "name" })
        ));
        assert_eq!(view.rows().len(), 1);
        assert!(!view.no_results_visible());
    }

    #[tokio::test]
    async fn resource_resolved_against_page() {
        let fetcher = StubFetcher::ok("[]");
        let (done, _) = search("https://example.com/links/index.html", fetcher.clone()).await;
        assert!(matches!(done, Completion::NoResults));
        let requested = fetcher.requested.lock().unwrap().clone();
        assert_eq!(requested, vec!["https://example.com/links/redirects.json".to_string()]);
    }
}
