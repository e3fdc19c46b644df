use num_format::{Locale, ToFormattedString};

use super::{ExtensionId, ExtensionQueryResult};

/// What a grid cell needs to know about an extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSummary {
  pub name: ExtensionId,
  pub display_name: String,
  pub download_count: u64,

  /// empty when the marketplace has no default icon for the extension
  pub icon_uri: String
}

impl ExtensionSummary {
  /// Stands in for an extension whose lookup failed
  pub fn placeholder(id: &ExtensionId) -> Self {
    ExtensionSummary {
      name: id.clone(),
      display_name: String::new(),
      download_count: 0,
      icon_uri: String::new()
    }
  }

  /// Download count with thousands grouping, e.g. `12,345`
  pub fn pretty_downloads(&self) -> String {
    self.download_count.to_formatted_string(&Locale::en)
  }
}

/// Marketplace representation => summary
pub fn project(id: &ExtensionId, extension: ExtensionQueryResult) -> ExtensionSummary {
  let download_count = extension.install_count();
  let icon_uri = extension.default_icon().unwrap_or_default().to_string();

  ExtensionSummary {
    name: id.clone(),
    display_name: extension.display_name,
    download_count,
    icon_uri
  }
}
