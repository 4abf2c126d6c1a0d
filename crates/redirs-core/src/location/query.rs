//! Query string → parameter map.

use std::collections::HashMap;

/// Name of the parameter that carries the search term.
pub const SEARCH_PARAM: &str = "search";

/// Parameters of a single page load. Repeated keys keep the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Parses `application/x-www-form-urlencoded` pairs; a leading `?` is ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Lower-cased `search` value; `None` when the parameter is absent.
    ///
    /// An empty value stays `Some("")`, which is still a filter.
    pub fn search_term(&self) -> Option<String> {
        self.get(SEARCH_PARAM).map(str::to_lowercase)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
