use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::error::BoxError;

/// Anything that can execute a prepared HTTP request.
///
/// The search client only ever talks to the network through this trait, so
/// tests can swap in a stub and callers can bring their own configured
/// `reqwest::Client` (proxies, timeouts, pooling).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, BoxError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<Response, BoxError> {
        Ok(reqwest::Client::execute(self, request).await?)
    }
}
