//! The question-asking controller.
//!
//! Wires the page's two behaviors, form submission and the compare toggle,
//! to the Ask API, and projects responses back into the page.

use crate::format::reference_items;
use crate::page::{ElementId, Page, REQUIRED_ELEMENTS};
use crate::placeholders;
use lexask_api::{AskApi, AskRequest, AskResponse};
use lexask_core::{AppConfig, AppError, AppResult, StaleResponses};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Notification for an empty question.
pub const EMPTY_QUESTION_ALERT: &str = "请输入问题";

/// Prefix of the notification for a failed request.
pub const REQUEST_FAILED_PREFIX: &str = "处理请求时出错: ";

/// Controller behavior knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    pub stale_responses: StaleResponses,
}

impl ControllerOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            stale_responses: config.stale_responses,
        }
    }
}

/// How a submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Empty question; nothing was sent.
    Rejected,
    /// The response was rendered.
    Rendered,
    /// A newer submission was issued before this response or failure
    /// arrived.
    Discarded,
    /// Transport or decode failure, already reported to the user.
    Failed(AppError),
}

impl SubmitOutcome {
    /// Convert into a `Result`, for callers that treat anything but a
    /// render as an error.
    pub fn into_result(self) -> AppResult<()> {
        match self {
            SubmitOutcome::Rendered | SubmitOutcome::Discarded => Ok(()),
            SubmitOutcome::Rejected => Err(AppError::Validation("Question is empty".to_string())),
            SubmitOutcome::Failed(err) => Err(err),
        }
    }
}

/// Hides the loading indicator when dropped, however the submission ends.
///
/// A superseded submission leaves the indicator alone under
/// [`StaleResponses::Discard`]; the latest one still owns it.
struct LoadingGuard<'a, P: Page, A: AskApi> {
    controller: &'a AskController<P, A>,
    ticket: u64,
}

impl<'a, P: Page, A: AskApi> LoadingGuard<'a, P, A> {
    fn show(controller: &'a AskController<P, A>, ticket: u64) -> Self {
        controller.page.set_hidden(ElementId::Loading, false);
        Self { controller, ticket }
    }
}

impl<P: Page, A: AskApi> Drop for LoadingGuard<'_, P, A> {
    fn drop(&mut self) {
        if !self.controller.is_stale(self.ticket) {
            self.controller.page.set_hidden(ElementId::Loading, true);
        }
    }
}

/// Controller for the question page.
///
/// One instance per page. `submit` takes `&self`, so submissions may
/// overlap; each one gets a sequence number and, under
/// [`StaleResponses::Discard`], only the latest may render.
pub struct AskController<P: Page, A: AskApi> {
    page: Arc<P>,
    api: A,
    options: ControllerOptions,
    issued: AtomicU64,
}

impl<P: Page, A: AskApi> AskController<P, A> {
    /// Attach to a ready page.
    ///
    /// Fails with `AppError::Page` if any required element is missing.
    /// On success the input placeholder shows a random example question.
    pub fn attach(page: Arc<P>, api: A, options: ControllerOptions) -> AppResult<Self> {
        let missing: Vec<&str> = REQUIRED_ELEMENTS
            .iter()
            .filter(|id| !page.has_element(**id))
            .map(|id| id.dom_id())
            .collect();

        if !missing.is_empty() {
            tracing::error!("Cannot attach controller, missing: {:?}", missing);
            return Err(AppError::Page(format!(
                "Missing required elements: {}",
                missing.join(", ")
            )));
        }

        page.set_placeholder(placeholders::random_example());
        tracing::debug!(
            "Controller attached to {} ({:?})",
            api.base_url(),
            options.stale_responses
        );

        Ok(Self {
            page,
            api,
            options,
            issued: AtomicU64::new(0),
        })
    }

    pub fn page(&self) -> &Arc<P> {
        &self.page
    }

    /// Handle a form submission.
    ///
    /// Every failure is reported through the page; the returned outcome
    /// tells the caller which path was taken.
    pub async fn submit(&self) -> SubmitOutcome {
        let question = self.page.question();
        let question = question.trim();

        if question.is_empty() {
            tracing::debug!("Rejected empty question");
            self.page.alert(EMPTY_QUESTION_ALERT);
            return SubmitOutcome::Rejected;
        }

        let request = AskRequest::new(question, self.page.compare_checked());
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(ticket, compare = request.compare, "Submitting question");

        let _loading = LoadingGuard::show(self, ticket);
        self.page.set_hidden(ElementId::ResultsContainer, true);

        match self.api.ask(&request).await {
            Ok(response) => {
                if self.is_stale(ticket) {
                    tracing::debug!(ticket, "Discarding response to superseded question");
                    return SubmitOutcome::Discarded;
                }
                self.render(&response);
                tracing::info!(ticket, "Rendered answer");
                SubmitOutcome::Rendered
            }
            Err(err) => {
                if self.is_stale(ticket) {
                    tracing::debug!(ticket, "Superseded question failed: {}", err);
                    return SubmitOutcome::Discarded;
                }
                tracing::error!(ticket, "Question failed: {}", err);
                self.page.alert(&format!("{}{}", REQUEST_FAILED_PREFIX, err));
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn is_stale(&self, ticket: u64) -> bool {
        self.options.stale_responses == StaleResponses::Discard
            && self.issued.load(Ordering::SeqCst) != ticket
    }

    /// Project a response into the page, replacing what was shown before.
    pub fn render(&self, response: &AskResponse) {
        let page = self.page.as_ref();

        page.set_text(ElementId::RagAnswer, &response.rag_response.answer);

        page.clear_references();
        for item in reference_items(&response.rag_response.references) {
            page.append_reference(&item);
        }

        match &response.direct_response {
            Some(direct) if page.compare_checked() => {
                page.set_text(ElementId::DirectAnswer, &direct.answer);
                page.set_hidden(ElementId::DirectAnswerContainer, false);
            }
            _ => page.set_hidden(ElementId::DirectAnswerContainer, true),
        }

        page.set_hidden(ElementId::ResultsContainer, false);
        page.scroll_into_view(ElementId::ResultsContainer);
    }

    /// Handle a change of the compare toggle.
    ///
    /// Only the panel's visibility follows the toggle; its content stays
    /// whatever the last render put there.
    pub fn toggle_compare(&self) {
        let checked = self.page.compare_checked();
        tracing::debug!("Compare mode {}", if checked { "on" } else { "off" });
        self.page.set_hidden(ElementId::DirectAnswerContainer, !checked);
    }
}
