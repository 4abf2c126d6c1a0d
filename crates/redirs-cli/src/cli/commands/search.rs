//! `redirs search [url]` – run the search view and print its output.

use anyhow::{bail, Context, Result};
use redirs_core::config::RedirsConfig;
use redirs_core::fetch::CurlFetcher;
use redirs_core::location::PageLocation;
use redirs_core::search::{initialize, Completion, SearchOptions};
use redirs_core::view::HtmlPage;
use std::path::Path;
use std::sync::Arc;

use crate::cli::OutputFormat;

pub async fn run_search(
    cfg: &RedirsConfig,
    location: &PageLocation,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let opts = SearchOptions {
        resource: cfg.resource_path.clone(),
    };
    let mut page = HtmlPage::new(cfg.render.title.clone());
    let fetcher = Arc::new(CurlFetcher::from_config(cfg));

    let done = initialize(location, fetcher, &mut page, &opts).await;
    if let Completion::Failed(err) = done {
        bail!("search failed: {err}");
    }

    let rendered = format_page(&page, format)?;
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

pub(crate) fn format_page(page: &HtmlPage, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => page.to_html(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(page.rows())?;
            json.push('\n');
            json
        }
        OutputFormat::Table => {
            if page.rows().is_empty() {
                return Ok("No results\n".to_string());
            }
            let width = page
                .rows()
                .iter()
                .map(|r| r.short_url.chars().count())
                .max()
                .unwrap_or(0);
            let mut out = String::new();
            for row in page.rows() {
                out.push_str(&format!("{:<width$}  {}\n", row.short_url, row.target));
            }
            out
        }
    })
}
