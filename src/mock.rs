use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::client::WebSearch;
use crate::context::SearchContext;
use crate::data_models::{SearchRequest, SearchResponse};
use crate::error::SearchError;

type SearchFn = dyn Fn(&SearchRequest) -> Result<SearchResponse, SearchError> + Send + Sync;

/// In-memory stand-in for [`crate::client::SearchClient`].
///
/// Returns whatever it was programmed with and records every request. Without
/// any programmed behavior it answers with an empty response.
#[derive(Default)]
pub struct MockSearchClient {
    search_fn: Option<Box<SearchFn>>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fn<F>(search_fn: F) -> Self
    where
        F: Fn(&SearchRequest) -> Result<SearchResponse, SearchError> + Send + Sync + 'static,
    {
        Self {
            search_fn: Some(Box::new(search_fn)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(response: SearchResponse) -> Self {
        Self::with_fn(move |_| Ok(response.clone()))
    }

    /// `make_error` runs once per call since [`SearchError`] is not `Clone`.
    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> SearchError + Send + Sync + 'static,
    {
        Self::with_fn(move |_| Err(make_error()))
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl WebSearch for MockSearchClient {
    async fn search(
        &self,
        _ctx: &SearchContext,
        request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        match &self.search_fn {
            Some(search_fn) => search_fn(request),
            None => Ok(SearchResponse::default()),
        }
    }
}
