//! Page location: the URL a search view is opened at.
//!
//! Mirrors what a browser exposes as `window.location`: the query string the
//! view reads its term from, the `host` used to build short links, and the
//! base against which `./redirects.json` is resolved.

mod query;

pub use query::{QueryParams, SEARCH_PARAM};

use url::Url;

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    /// Parses an absolute page URL (`http`, `https` or `file`).
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(input)?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Host plus explicit port, e.g. `example.com` or `127.0.0.1:8080`.
    ///
    /// Default ports are omitted; an empty string for host-less URLs.
    pub fn host(&self) -> String {
        let host = self.url.host_str().unwrap_or("");
        match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    pub fn query_params(&self) -> QueryParams {
        QueryParams::from_query(self.url.query().unwrap_or(""))
    }

    /// Resolves a resource path (e.g. `./redirects.json`) against this page.
    pub fn resolve(&self, resource: &str) -> Result<Url, FetchError> {
        self.url
            .join(resource)
            .map_err(|e| FetchError::InvalidUrl(format!("{resource}: {e}")))
    }

    /// Returns a copy whose `search` parameter is `term`, replacing any existing one.
    pub fn with_search_term(&self, term: &str) -> Self {
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != SEARCH_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let mut url = self.url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (k, v) in &kept {
                pairs.append_pair(k, v);
            }
            pairs.append_pair(SEARCH_PARAM, term);
        }
        Self { url }
    }
}
