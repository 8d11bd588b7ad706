//! Wire types for the question-answering service.
//!
//! Field names follow the service's JSON exactly (snake_case).

use serde::{Deserialize, Serialize};

/// Body of `POST /api/ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    /// The user's question, already trimmed
    pub query: String,

    /// Ask the service for a direct (no retrieval) answer as well
    pub compare: bool,
}

impl AskRequest {
    /// Create a new ask request.
    pub fn new(query: impl Into<String>, compare: bool) -> Self {
        Self {
            query: query.into(),
            compare,
        }
    }
}

/// A retrieved passage backing the RAG answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub text: String,

    /// Relevance score; the range is up to the service
    pub score: f64,
}

/// The retrieval-augmented answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagResponse {
    /// Echo of the question; not every deployment sends it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    pub answer: String,

    /// References in the order the service ranked them
    pub references: Vec<Reference>,
}

/// The answer produced without retrieval, only present in compare mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectResponse {
    pub answer: String,
}

/// Response of `POST /api/ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub rag_response: RagResponse,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_response: Option<DirectResponse>,
}

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_metadata: Option<bool>,
}

impl SearchQuery {
    /// Create a search query using the service's defaults.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: None,
            min_score: None,
            include_metadata: None,
        }
    }

    /// Limit the number of hits.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Drop hits scoring below `min_score`.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Ask for the stored metadata of each hit.
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = Some(true);
        self
    }
}

/// Body of `POST /batch-search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSearchQuery {
    pub queries: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_metadata: Option<bool>,
}

impl BatchSearchQuery {
    pub fn new(queries: Vec<String>) -> Self {
        Self {
            queries,
            top_k: None,
            min_score: None,
            include_metadata: None,
        }
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = Some(true);
        self
    }
}

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// 1-based rank assigned by the service
    pub rank: u32,
    pub text: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Response of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

/// Response of `POST /batch-search`, one hit list per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSearchResponse {
    pub results: Vec<Vec<SearchHit>>,
}

/// Response of `GET /api`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
}
