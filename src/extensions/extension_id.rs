use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

use super::ResolveError;

/// Names a marketplace item, in `publisher.name` form.
/// Only emptiness is checked, the marketplace is the judge of everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionId(String);

impl ExtensionId {
  pub fn new(id: impl Into<String>) -> std::result::Result<Self, ResolveError> {
    let id = id.into();
    if id.is_empty() { return Err(ResolveError::EmptyIdentifier); }

    Ok(ExtensionId(id))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl FromStr for ExtensionId {
  type Err = ResolveError;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    ExtensionId::new(s)
  }
}

impl Display for ExtensionId {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for ExtensionId {
  fn as_ref(&self) -> &str { &self.0 }
}
