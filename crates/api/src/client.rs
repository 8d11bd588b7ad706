//! Ask API abstraction.
//!
//! The controller only ever talks to the service through this trait, so a
//! scripted implementation can stand in for the network in tests.

use crate::types::{
    ApiInfo, AskRequest, AskResponse, BatchSearchQuery, BatchSearchResponse, SearchQuery,
    SearchResponse,
};
use lexask_core::AppResult;
use std::sync::Arc;

/// Endpoint paths, relative to the service base URL.
pub mod endpoints {
    pub const ROOT: &str = "/api";
    pub const ASK: &str = "/api/ask";
    pub const SEARCH: &str = "/search";
    pub const BATCH_SEARCH: &str = "/batch-search";
}

/// Trait for question-answering service transports.
///
/// Errors follow one convention across implementations:
/// - `AppError::Transport` for network failures and non-success statuses
/// - `AppError::Decode` for bodies that do not match the expected shape
#[async_trait::async_trait]
pub trait AskApi: Send + Sync {
    /// Base URL requests are sent to, for logging.
    fn base_url(&self) -> &str;

    /// Ask a question (`POST /api/ask`).
    async fn ask(&self, request: &AskRequest) -> AppResult<AskResponse>;

    /// Raw retrieval without generation (`POST /search`).
    async fn search(&self, query: &SearchQuery) -> AppResult<SearchResponse>;

    /// Retrieval for several queries at once (`POST /batch-search`).
    async fn batch_search(&self, query: &BatchSearchQuery) -> AppResult<BatchSearchResponse>;

    /// Service banner (`GET /api`).
    async fn info(&self) -> AppResult<ApiInfo>;
}

#[async_trait::async_trait]
impl<T: AskApi + ?Sized> AskApi for Arc<T> {
    fn base_url(&self) -> &str {
        (**self).base_url()
    }

    async fn ask(&self, request: &AskRequest) -> AppResult<AskResponse> {
        (**self).ask(request).await
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<SearchResponse> {
        (**self).search(query).await
    }

    async fn batch_search(&self, query: &BatchSearchQuery) -> AppResult<BatchSearchResponse> {
        (**self).batch_search(query).await
    }

    async fn info(&self) -> AppResult<ApiInfo> {
        (**self).info().await
    }
}
