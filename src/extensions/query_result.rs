use serde::Deserialize;

pub const INSTALL_STATISTIC: &str = "install";
pub const DEFAULT_ICON_ASSET: &str = "Microsoft.VisualStudio.Services.Icons.Default";

/// Top level of an extension-query response, only `results[0].extensions[0]` is ever read
#[derive(Debug, Deserialize, Clone, Default)]
pub struct QueryResponse {
  #[serde(default)]
  pub results: Vec<QueryResult>
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct QueryResult {
  #[serde(default)]
  pub extensions: Vec<ExtensionQueryResult>
}

/// Marketplace representation of a single extension
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionQueryResult {
  #[serde(default)]
  pub display_name: String,

  #[serde(default)]
  pub statistics: Vec<Statistic>,

  #[serde(default)]
  pub versions: Vec<Version>
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
  #[serde(default)]
  pub statistic_name: String,

  // ratings come back fractional, installs never do
  #[serde(default)]
  pub value: f64
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Version {
  #[serde(default)]
  pub files: Vec<VersionFile>
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VersionFile {
  #[serde(default)]
  pub asset_type: String,

  #[serde(default)]
  pub source: String
}

impl QueryResponse {
  pub fn into_first_extension(self) -> Option<ExtensionQueryResult> {
    self.results.into_iter().next()?.extensions.into_iter().next()
  }
}

impl ExtensionQueryResult {
  pub fn install_count(&self) -> u64 {
    self.statistics
      .iter()
      .find(|stat| stat.statistic_name == INSTALL_STATISTIC)
      .map(|stat| if stat.value.is_finite() && stat.value > 0.0 { stat.value as u64 } else { 0 })
      .unwrap_or(0)
  }

  /// Only the first (latest) version is consulted
  pub fn default_icon(&self) -> Option<&str> {
    self.versions
      .first()?
      .files
      .iter()
      .find(|file| file.asset_type == DEFAULT_ICON_ASSET)
      .map(|file| file.source.as_str())
  }
}
