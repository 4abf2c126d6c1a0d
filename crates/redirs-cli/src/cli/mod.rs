//! CLI for redirs.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use redirs_core::config::{self, RedirsConfig};
use redirs_core::location::PageLocation;
use std::path::PathBuf;

use commands::{run_check, run_search};

/// Top-level CLI for the redirect search view.
#[derive(Debug, Parser)]
#[command(name = "redirs")]
#[command(about = "redirs: search a static list of URL redirects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// How `search` prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Full search page with the results table.
    #[default]
    Html,
    /// One `short-url  target` line per result.
    Table,
    /// JSON array of result rows.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Search the redirects published next to a page.
    Search {
        /// Page URL the search runs at; its `search` query parameter is the term.
        /// Falls back to `default_page_url` from the config.
        url: Option<String>,
        /// Search term; replaces any `search` parameter in the URL.
        #[arg(long, short)]
        term: Option<String>,
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Write output to a file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Fetch the redirects dataset and report missing fields and duplicate names.
    Check {
        /// Page URL the dataset is published next to.
        url: Option<String>,
    },
}

/// Resolves the page location from the argument or the configured default.
fn page_location(url: Option<String>, cfg: &RedirsConfig) -> Result<PageLocation> {
    let raw = url
        .or_else(|| cfg.default_page_url.clone())
        .context("no page URL given and no default_page_url in config")?;
    PageLocation::parse(&raw).with_context(|| format!("invalid page URL: {raw}"))
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Search {
                url,
                term,
                format,
                output,
            } => {
                let mut location = page_location(url, &cfg)?;
                if let Some(term) = term {
                    location = location.with_search_term(&term);
                }
                run_search(&cfg, &location, format, output.as_deref()).await?;
            }
            CliCommand::Check { url } => {
                let location = page_location(url, &cfg)?;
                run_check(&cfg, &location).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
