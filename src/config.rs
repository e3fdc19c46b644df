use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::extensions::{recommended, ExtensionId, JoinPolicy, MARKETPLACE_QUERY_ENDPOINT};
use crate::render::{GridOptions, MARKETPLACE_ITEM_URL};

/// Settings loaded from `~/.config/extshelf/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfConfig {
  /// Extension-query endpoint every lookup is POSTed to.
  pub endpoint: String,
  /// Item pages are linked as `<item_url_base>?itemName=<id>`.
  pub item_url_base: String,
  /// Identifiers shown on the shelf, in display order.
  pub extensions: Vec<String>,
  /// Cells per grid row.
  pub columns: u16,
  /// "isolated" (failed lookups become blank cells) or "strict" (any failure aborts).
  #[serde(default)]
  pub join_policy: JoinPolicy,
  /// Optional per-request timeout in seconds (None = wait as long as the client does).
  #[serde(default)]
  pub request_timeout_secs: Option<u64>
}

impl Default for ShelfConfig {
  fn default() -> Self {
    Self {
      endpoint: MARKETPLACE_QUERY_ENDPOINT.into(),
      item_url_base: MARKETPLACE_ITEM_URL.into(),
      extensions: recommended(),
      columns: 9,
      join_policy: JoinPolicy::Isolated,
      request_timeout_secs: None
    }
  }
}

impl ShelfConfig {
  pub fn endpoint_url(&self) -> Result<Url> {
    Url::parse(&self.endpoint).with_context(|| format!("invalid endpoint '{}'", self.endpoint))
  }

  pub fn request_timeout(&self) -> Option<Duration> {
    self.request_timeout_secs.map(Duration::from_secs)
  }

  pub fn extension_ids(&self) -> Result<Vec<ExtensionId>> {
    self.extensions
      .iter()
      .map(|id| ExtensionId::new(id.as_str()).context("invalid entry in 'extensions'"))
      .collect()
  }

  pub fn grid_options(&self) -> Result<GridOptions> {
    Ok(GridOptions {
      columns: self.columns.max(1),
      item_url_base: Url::parse(&self.item_url_base)
        .with_context(|| format!("invalid item_url_base '{}'", self.item_url_base))?
    })
  }
}

pub fn config_path() -> Result<PathBuf> {
  let xdg_dirs = xdg::BaseDirectories::with_prefix("extshelf")?;
  Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShelfConfig> {
  let path = config_path()?;
  if !path.exists() {
    let default_cfg = ShelfConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&path, toml)?;
    tracing::info!("created default config at {}", path.display());
    return Ok(default_cfg);
  }

  load_from(&path)
}

pub fn load_from(path: &Path) -> Result<ShelfConfig> {
  let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
  let cfg: ShelfConfig = toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
  Ok(cfg)
}
