//! Page controller for the legal question-answering service.
//!
//! The controller captures a question from a [`Page`], sends it to an
//! [`AskApi`](lexask_api::AskApi), and renders the RAG answer, its
//! references, and, in compare mode, the direct model answer.
//!
//! # Example
//! ```no_run
//! use lexask_api::HttpAskClient;
//! use lexask_controller::{AskController, ControllerOptions, MemoryPage};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let page = Arc::new(MemoryPage::new());
//! let api = HttpAskClient::new("http://localhost:8000", None)?;
//! let controller = AskController::attach(page.clone(), api, ControllerOptions::default())?;
//!
//! page.set_question("什么是民事诉讼？");
//! controller.submit().await.into_result()?;
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod format;
pub mod memory;
pub mod page;
pub mod placeholders;

pub use controller::{
    AskController, ControllerOptions, SubmitOutcome, EMPTY_QUESTION_ALERT, REQUEST_FAILED_PREFIX,
};
pub use format::{reference_items, round_score, truncate_reference, ReferenceItem};
pub use memory::{MemoryPage, PageSnapshot};
pub use page::{ElementId, Page, REQUIRED_ELEMENTS};
