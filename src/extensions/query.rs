use serde::Serialize;

use super::ExtensionId;

/// Asks for statistics plus version and file metadata
/// (IncludeVersions | IncludeFiles | IncludeCategoryAndTags | IncludeStatistics | ExcludeNonValidated).
pub const QUERY_FLAGS: u32 = 914;

pub const ACCEPT_HEADER: &str = "application/json;api-version=3.0-preview.1";

/// Marketplace filter criteria are keyed by a numeric type, only exact name matching is used here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
  ExtensionName
}

impl From<FilterType> for u32 {
  fn from(filter_type: FilterType) -> u32 {
    match filter_type {
      FilterType::ExtensionName => 7
    }
  }
}

impl Serialize for FilterType {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32((*self).into())
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriterion {
  pub filter_type: FilterType,
  pub value: String
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryFilter {
  pub criteria: Vec<FilterCriterion>
}

/// Body of a POST to the extension-query endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionQuery {
  pub filters: Vec<QueryFilter>,
  pub flags: u32
}

impl ExtensionQuery {
  pub fn by_name(id: &ExtensionId) -> Self {
    ExtensionQuery {
      filters: vec![
        QueryFilter {
          criteria: vec![
            FilterCriterion { filter_type: FilterType::ExtensionName, value: id.to_string() }
          ]
        }
      ],
      flags: QUERY_FLAGS
    }
  }
}
