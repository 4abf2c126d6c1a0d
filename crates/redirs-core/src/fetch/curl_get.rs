//! GET via the curl crate (libcurl).

use std::time::Duration;

use url::Url;

use super::{is_success, FetchedBody, Fetcher};
use crate::config::RedirsConfig;
use crate::error::FetchError;

/// Blocking libcurl client. Runs in the current thread; the search pipeline
/// calls it from `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

impl CurlFetcher {
    pub fn from_config(cfg: &RedirsConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedBody, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(%url, status, bytes = body.len(), "GET finished");
        if !is_success(status) {
            return Err(FetchError::Status(status));
        }

        Ok(FetchedBody { status, body })
    }
}
