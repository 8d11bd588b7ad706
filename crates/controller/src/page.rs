//! The page seam.
//!
//! `Page` is everything the controller needs from its host: a handful of
//! addressable elements, their visibility and text, and a way to raise a
//! blocking notification. A browser binding, a terminal, or a test double
//! can all sit behind it.

use crate::format::ReferenceItem;

/// Elements the controller addresses, named after their page ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    QuestionForm,
    QuestionInput,
    CompareToggle,
    Loading,
    ResultsContainer,
    RagAnswer,
    ReferencesContainer,
    DirectAnswerContainer,
    DirectAnswer,
}

/// Every element that must exist before the controller attaches.
pub const REQUIRED_ELEMENTS: [ElementId; 9] = [
    ElementId::QuestionForm,
    ElementId::QuestionInput,
    ElementId::CompareToggle,
    ElementId::Loading,
    ElementId::ResultsContainer,
    ElementId::RagAnswer,
    ElementId::ReferencesContainer,
    ElementId::DirectAnswerContainer,
    ElementId::DirectAnswer,
];

impl ElementId {
    /// The element's id in the page markup.
    pub fn dom_id(&self) -> &'static str {
        match self {
            Self::QuestionForm => "question-form",
            Self::QuestionInput => "question",
            Self::CompareToggle => "compare-mode",
            Self::Loading => "loading",
            Self::ResultsContainer => "results-container",
            Self::RagAnswer => "rag-answer",
            Self::ReferencesContainer => "references-container",
            Self::DirectAnswerContainer => "direct-answer-container",
            Self::DirectAnswer => "direct-answer",
        }
    }

    /// Look an element up by its markup id.
    pub fn from_dom_id(id: &str) -> Option<Self> {
        REQUIRED_ELEMENTS.iter().copied().find(|e| e.dom_id() == id)
    }
}

/// Host page the controller renders into.
///
/// Methods take `&self`: a page is shared by every in-flight submission, so
/// implementations keep their state behind interior mutability, the way a
/// DOM does.
pub trait Page: Send + Sync {
    /// Whether the element is present on the page.
    fn has_element(&self, id: ElementId) -> bool;

    /// Current (untrimmed) value of the question input.
    fn question(&self) -> String;

    /// Whether the compare toggle is checked.
    fn compare_checked(&self) -> bool;

    fn set_placeholder(&self, text: &str);

    /// Show or hide an element.
    fn set_hidden(&self, id: ElementId, hidden: bool);

    /// Replace an element's text content. No markup is interpreted.
    fn set_text(&self, id: ElementId, text: &str);

    /// Remove every item from the references container.
    fn clear_references(&self);

    /// Append one item to the references container.
    fn append_reference(&self, item: &ReferenceItem);

    fn scroll_into_view(&self, id: ElementId);

    /// Raise a blocking notification.
    fn alert(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_ids_match_markup() {
        assert_eq!(ElementId::QuestionInput.dom_id(), "question");
        assert_eq!(ElementId::CompareToggle.dom_id(), "compare-mode");
        assert_eq!(
            ElementId::DirectAnswerContainer.dom_id(),
            "direct-answer-container"
        );
    }

    #[test]
    fn test_dom_id_round_trip_for_every_element() {
        for id in REQUIRED_ELEMENTS {
            assert_eq!(ElementId::from_dom_id(id.dom_id()), Some(id));
        }
        assert_eq!(ElementId::from_dom_id("sidebar"), None);
    }
}
