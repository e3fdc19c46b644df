mod html;

pub use html::*;

use url::Url;

use crate::extensions::ExtensionId;

pub const MARKETPLACE_ITEM_URL: &str = "https://marketplace.visualstudio.com/items";

/// Layout shared by the HTML grid and the terminal shelf
#[derive(Debug, Clone)]
pub struct GridOptions {
  pub columns: u16,

  /// item pages live at `<item_url_base>?itemName=<id>`
  pub item_url_base: Url
}

impl GridOptions {
  pub fn item_url(&self, id: &ExtensionId) -> String {
    let mut url = self.item_url_base.clone();
    url.query_pairs_mut().append_pair("itemName", id.as_str());
    url.into()
  }
}

impl Default for GridOptions {
  fn default() -> Self {
    GridOptions {
      columns: 9,
      item_url_base: Url::parse(MARKETPLACE_ITEM_URL).expect("marketplace item url is valid")
    }
  }
}
