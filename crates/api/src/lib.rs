//! Client crate for the legal question-answering service.
//!
//! This crate provides a transport-agnostic [`AskApi`] trait, the wire
//! types of the service, and an HTTP implementation built on reqwest.
//!
//! # Example
//! ```no_run
//! use lexask_api::{AskApi, AskRequest, HttpAskClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpAskClient::new("http://localhost:8000", None)?;
//! let response = client.ask(&AskRequest::new("什么是民事诉讼？", true)).await?;
//! println!("{}", response.rag_response.answer);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod http;
pub mod types;

// Re-export main types
pub use client::{endpoints, AskApi};
pub use factory::create_client;
pub use http::HttpAskClient;
pub use types::{
    ApiInfo, AskRequest, AskResponse, BatchSearchQuery, BatchSearchResponse, DirectResponse,
    RagResponse, Reference, SearchHit, SearchQuery, SearchResponse,
};
