use thiserror::Error;

/// Why an extension could not be resolved
#[derive(Debug, Error)]
pub enum ResolveError {
  #[error("extension identifier must not be empty")]
  EmptyIdentifier,

  #[error("marketplace request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("marketplace answered {status} for {identifier}")]
  Status { identifier: String, status: reqwest::StatusCode },

  #[error("could not decode marketplace response for {identifier}: {source}")]
  Decode { identifier: String, #[source] source: serde_json::Error },

  #[error("marketplace has no extension named {identifier}")]
  NoMatch { identifier: String }
}
