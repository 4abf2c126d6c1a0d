//! `redirs check [url]` – dataset sanity report.

use anyhow::Result;
use redirs_core::check::{inspect, DatasetReport};
use redirs_core::config::RedirsConfig;
use redirs_core::fetch::CurlFetcher;
use redirs_core::location::PageLocation;
use redirs_core::search::{load_entries, SearchOptions};
use std::sync::Arc;

pub async fn run_check(cfg: &RedirsConfig, location: &PageLocation) -> Result<()> {
    let opts = SearchOptions {
        resource: cfg.resource_path.clone(),
    };
    let fetcher = Arc::new(CurlFetcher::from_config(cfg));
    let entries = load_entries(location, fetcher, &opts).await?;
    let report = inspect(&entries);

    print!("{}", format_report(&report));
    if !report.is_clean() {
        tracing::warn!(
            invalid_name = report.invalid_name.len(),
            invalid_target = report.invalid_target.len(),
            duplicates = report.duplicate_names.len(),
            "dataset has problems"
        );
    }
    Ok(())
}

pub(crate) fn format_report(report: &DatasetReport) -> String {
    let mut out = format!("{} entries\n", report.total);
    for i in &report.invalid_name {
        out.push_str(&format!("entry {i}: name missing or not a string\n"));
    }
    for i in &report.invalid_target {
        out.push_str(&format!("entry {i}: target missing or not a string\n"));
    }
    for (name, count) in &report.duplicate_names {
        out.push_str(&format!("duplicate name {name:?} ({count} entries)\n"));
    }
    if report.is_clean() {
        out.push_str("OK\n");
    }
    out
}
