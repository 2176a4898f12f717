use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Request, Url};
use tracing::{Instrument, Span, debug, error, info, warn};

use crate::context::SearchContext;
use crate::data_models::{SearchRequest, SearchResponse};
use crate::error::{BoxError, SearchError};
use crate::transport::Transport;

pub const DEFAULT_SEARCH_URL: &str = "https://api.tavily.com/search";

/// Anything that can answer a web search. Implemented by the real
/// [`SearchClient`] and by [`crate::mock::MockSearchClient`].
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(
        &self,
        ctx: &SearchContext,
        request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError>;

    /// Search with nothing but a query; every other option takes its default.
    async fn search_query(
        &self,
        ctx: &SearchContext,
        query: &str,
    ) -> Result<SearchResponse, SearchError> {
        self.search(ctx, &SearchRequest::new(query)).await
    }
}

/// API key wrapper that never prints its contents.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Client for the search API. Cheap to clone; every field is read-only
/// after construction, so one instance can serve concurrent callers.
#[derive(Clone)]
pub struct SearchClient {
    api_key: ApiKey,
    search_url: String,
    transport: Arc<dyn Transport>,
    span: Span,
}

impl SearchClient {
    pub fn builder(api_key: impl Into<String>) -> SearchClientBuilder {
        SearchClientBuilder {
            api_key: api_key.into(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            transport: None,
            span: None,
        }
    }

    /// Shortcut for a client with the default transport and logging span.
    pub fn new(
        api_key: impl Into<String>,
        search_url: impl Into<String>,
    ) -> Result<SearchClient, SearchError> {
        Self::builder(api_key).search_url(search_url).build()
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    fn build_request(&self, body: Vec<u8>) -> Result<Request, BoxError> {
        let url = Url::parse(&self.search_url)?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose()))?;
        authorization.set_sensitive(true);

        let mut request = Request::new(Method::POST, url);
        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        *request.body_mut() = Some(body.into());

        Ok(request)
    }

    async fn execute_search(
        &self,
        ctx: &SearchContext,
        search_request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        let body = serde_json::to_vec(search_request).map_err(|e| {
            error!(error = %e, "failed to encode search request");
            SearchError::Serialization(e)
        })?;

        let request = self.build_request(body).map_err(|e| {
            error!(error = %e, url = %self.search_url, "failed to build search request");
            SearchError::RequestBuild(e)
        })?;

        info!(url = %self.search_url, query = %search_request.query, "sending request to search API");

        let response = ctx
            .run(self.transport.execute(request))
            .await
            .map_err(BoxError::from)
            .and_then(|result| result)
            .map_err(|e| {
                error!(error = %e, url = %self.search_url, "search request failed");
                SearchError::Transport(e)
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response from search API");

        if !status.is_success() {
            // Best effort: an unreadable body must not hide the status.
            let body = match ctx.run(response.text()).await {
                Ok(Ok(body)) => body,
                Ok(Err(e)) => {
                    warn!(error = %e, "failed to read error response body");
                    String::new()
                }
                Err(reason) => {
                    warn!(error = %reason, "failed to read error response body");
                    String::new()
                }
            };
            error!(status = status.as_u16(), body = %body, "non-2xx response from search API");
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = ctx
            .run(response.bytes())
            .await
            .map_err(BoxError::from)
            .and_then(|result| result.map_err(BoxError::from))
            .map_err(|e| {
                error!(error = %e, "failed to read search response body");
                SearchError::Transport(e)
            })?;

        serde_json::from_slice::<SearchResponse>(&bytes).map_err(|e| {
            error!(error = %e, "failed to decode search response");
            SearchError::Decode(e)
        })
    }
}

#[async_trait]
impl WebSearch for SearchClient {
    async fn search(
        &self,
        ctx: &SearchContext,
        request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        self.execute_search(ctx, request)
            .instrument(self.span.clone())
            .await
    }
}

impl fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClient")
            .field("api_key", &self.api_key)
            .field("search_url", &self.search_url)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SearchClient`].
///
/// The key and URL must be non-empty. A missing transport falls back to a
/// plain `reqwest::Client`, a missing span to `search_client{url=..}`.
pub struct SearchClientBuilder {
    api_key: String,
    search_url: String,
    transport: Option<Arc<dyn Transport>>,
    span: Option<Span>,
}

impl SearchClientBuilder {
    pub fn search_url(mut self, search_url: impl Into<String>) -> Self {
        self.search_url = search_url.into();
        self
    }

    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Span every search event is recorded under.
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn build(self) -> Result<SearchClient, SearchError> {
        if self.api_key.trim().is_empty() {
            return Err(SearchError::Configuration(
                "api key cannot be empty".to_string(),
            ));
        }
        if self.search_url.trim().is_empty() {
            return Err(SearchError::Configuration(
                "search url cannot be empty".to_string(),
            ));
        }

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(reqwest::Client::new()));
        let span = self
            .span
            .unwrap_or_else(|| tracing::info_span!("search_client", url = %self.search_url));

        Ok(SearchClient {
            api_key: ApiKey(self.api_key),
            search_url: self.search_url,
            transport,
            span,
        })
    }
}
