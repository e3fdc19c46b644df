use std::time::{Duration, Instant};

use reqwest::{Client, header::{ACCEPT, CONTENT_TYPE}};
use url::Url;

use super::{
  fan_out, project, ExtensionId, ExtensionQuery, ExtensionSummary, JoinPolicy, QueryResponse, ResolveError,
  ACCEPT_HEADER
};

pub const MARKETPLACE_QUERY_ENDPOINT: &str = "https://marketplace.visualstudio.com/_apis/public/gallery/extensionquery";

/// Looks extensions up on the marketplace, one POST per extension.
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Resolver {
  client: Client,
  endpoint: Url
}

impl Resolver {
  pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, ResolveError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout { builder = builder.timeout(timeout); }

    Ok(Resolver { client: builder.build()?, endpoint })
  }

  pub fn endpoint(&self) -> &Url { &self.endpoint }

  /// Exactly one request, no retries. Missing statistics or icons are not errors,
  /// see [`project`] for the defaults.
  pub async fn resolve(&self, id: &ExtensionId) -> Result<ExtensionSummary, ResolveError> {
    let started = Instant::now();

    let response = self.client
      .post(self.endpoint.clone())
      .header(CONTENT_TYPE, "application/json")
      .header(ACCEPT, ACCEPT_HEADER)
      .json(&ExtensionQuery::by_name(id))
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      return Err(ResolveError::Status { identifier: id.to_string(), status });
    }

    // decode by hand (instead of Response::json) so a bad body is told apart from a dropped connection
    let body = response.bytes().await?;
    let extension = serde_json::from_slice::<QueryResponse>(&body)
      .map_err(|source| ResolveError::Decode { identifier: id.to_string(), source })?
      .into_first_extension()
      .ok_or_else(|| ResolveError::NoMatch { identifier: id.to_string() })?;

    let summary = project(id, extension);

    tracing::debug!(
      extension = %id,
      downloads = summary.download_count,
      elapsed_ms = started.elapsed().as_millis() as u64,
      "resolved extension"
    );

    Ok(summary)
  }

  /// Resolves every id concurrently, results come back in the order of `ids`
  pub async fn resolve_all(&self, ids: &[ExtensionId], policy: JoinPolicy) -> Result<Vec<ExtensionSummary>, ResolveError> {
    fan_out(ids, policy, |id| self.resolve(id)).await
  }
}
