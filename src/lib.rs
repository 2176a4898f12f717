pub mod client;
pub mod config;
pub mod context;
pub mod data_models;
pub mod error;
pub mod mock;
pub mod transport;

pub use client::{DEFAULT_SEARCH_URL, SearchClient, SearchClientBuilder, WebSearch};
pub use context::{ContextError, SearchContext};
pub use data_models::{ImageResult, SearchRequest, SearchResponse, SiteResult};
pub use error::{BoxError, SearchError};
pub use mock::MockSearchClient;
pub use transport::Transport;
