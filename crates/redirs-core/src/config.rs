use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetch::REDIRECTS_RESOURCE;

/// Page rendering options (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// `<title>` of the rendered search page.
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Redirects".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/redirs/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirsConfig {
    /// Path of the redirects resource, resolved against the page URL.
    pub resource_path: String,
    /// Connect timeout for the resource GET, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout for the resource GET, in seconds.
    pub timeout_secs: u64,
    /// Optional User-Agent header (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Page URL used when the CLI is not given one.
    #[serde(default)]
    pub default_page_url: Option<String>,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for RedirsConfig {
    fn default() -> Self {
        Self {
            resource_path: REDIRECTS_RESOURCE.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: None,
            default_page_url: None,
            render: RenderConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("redirs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RedirsConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<RedirsConfig> {
    if !path.exists() {
        let default_cfg = RedirsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: RedirsConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    Ok(cfg)
}
