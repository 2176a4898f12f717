use thiserror::Error;

/// Boxed cause carried by transport and request-build failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every way a search can fail. None of these are retried by the client.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Bad input when constructing the client.
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    /// The request could not be encoded as JSON.
    #[error("failed to encode search request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The HTTP request could not be assembled (bad endpoint URL, bad header value).
    #[error("failed to build search request: {0}")]
    RequestBuild(#[source] BoxError),

    /// Network failure, cancellation or deadline expiry.
    #[error("search request failed: {0}")]
    Transport(#[source] BoxError),

    /// The API answered with a status outside 200..300.
    #[error("non-2xx response from search API: {status} - {body}")]
    Api { status: u16, body: String },

    /// A 2xx response whose body is not a valid search response.
    #[error("failed to decode search response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl SearchError {
    /// HTTP status of an [`SearchError::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
