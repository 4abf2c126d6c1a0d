//! Retrieval of the redirects resource.
//!
//! The search pipeline only depends on the [`Fetcher`] trait; [`CurlFetcher`]
//! is the libcurl-backed implementation used by the CLI.

mod curl_get;

pub use curl_get::CurlFetcher;

use url::Url;

use crate::error::FetchError;

/// Default resource path, relative to the page location.
pub const REDIRECTS_RESOURCE: &str = "./redirects.json";

/// Body of a successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs one blocking GET. Implementations must map non-2xx responses to
/// [`FetchError::Status`].
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> Result<FetchedBody, FetchError>;
}

/// True for 2xx; `file://` transfers report 0 and count as success.
pub(crate) fn is_success(code: u32) -> bool {
    code == 0 || (200..300).contains(&code)
}
