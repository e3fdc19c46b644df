use std::future::Future;

use futures::future::{join_all, try_join_all};
use serde::{Deserialize, Serialize};

use super::{ExtensionId, ExtensionSummary, ResolveError};

/// What a batch does when one of its lookups fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinPolicy {
  /// The first failure fails the whole batch
  Strict,

  /// A failed lookup is logged and replaced by [`ExtensionSummary::placeholder`]
  #[default]
  Isolated
}

/// Runs `lookup` once for every id, all at once, and waits for all of them.
/// The output lines up with `ids` no matter which lookup finishes first.
pub async fn fan_out<'a, F, Fut>(ids: &'a [ExtensionId], policy: JoinPolicy, lookup: F) -> Result<Vec<ExtensionSummary>, ResolveError>
where
  F: Fn(&'a ExtensionId) -> Fut,
  Fut: Future<Output = Result<ExtensionSummary, ResolveError>>
{
  let lookups = ids.iter().map(|id| lookup(id));

  match policy {
    JoinPolicy::Strict => try_join_all(lookups).await,
    JoinPolicy::Isolated => Ok(
      join_all(lookups)
        .await
        .into_iter()
        .zip(ids)
        .map(|(result, id)| result.unwrap_or_else(|error| {
          tracing::warn!(extension = %id, %error, "lookup failed, using placeholder");
          ExtensionSummary::placeholder(id)
        }))
        .collect()
    )
  }
}
