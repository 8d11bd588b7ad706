//! In-memory [`Page`] implementation.
//!
//! Holds the same state the HTML page does (input values, visibility,
//! text content, rendered references) so it can back a terminal front end
//! or stand in for the browser in tests.

use crate::format::ReferenceItem;
use crate::page::{ElementId, Page, REQUIRED_ELEMENTS};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

/// Point-in-time copy of a [`MemoryPage`].
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    pub question: String,
    pub placeholder: String,
    pub compare_checked: bool,
    pub hidden: HashSet<ElementId>,
    pub texts: HashMap<ElementId, String>,
    pub references: Vec<ReferenceItem>,
    pub alerts: Vec<String>,
    pub scrolled_to: Vec<ElementId>,
}

impl PageSnapshot {
    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.hidden.contains(&id)
    }

    /// Text content of an element, empty if never set.
    pub fn text(&self, id: ElementId) -> &str {
        self.texts.get(&id).map(String::as_str).unwrap_or("")
    }
}

/// A page whose elements live in memory.
pub struct MemoryPage {
    present: HashSet<ElementId>,
    state: Mutex<PageSnapshot>,
}

impl MemoryPage {
    /// Create a page with every required element, in its initial state.
    ///
    /// Like the markup, the loading indicator, results container and
    /// comparison panel start hidden.
    pub fn new() -> Self {
        Self::with_elements(REQUIRED_ELEMENTS)
    }

    /// Create a page that only has the given elements.
    pub fn with_elements(elements: impl IntoIterator<Item = ElementId>) -> Self {
        let hidden = [
            ElementId::Loading,
            ElementId::ResultsContainer,
            ElementId::DirectAnswerContainer,
        ]
        .into_iter()
        .collect();

        Self {
            present: elements.into_iter().collect(),
            state: Mutex::new(PageSnapshot {
                hidden,
                ..PageSnapshot::default()
            }),
        }
    }

    /// Create a page missing `missing`.
    pub fn without(missing: ElementId) -> Self {
        Self::with_elements(REQUIRED_ELEMENTS.into_iter().filter(|id| *id != missing))
    }

    /// Type into the question input.
    pub fn set_question(&self, question: impl Into<String>) {
        self.state.lock().question = question.into();
    }

    /// Check or uncheck the compare toggle.
    ///
    /// This only changes the input; the change handler is the
    /// controller's `toggle_compare`.
    pub fn set_compare_checked(&self, checked: bool) {
        self.state.lock().compare_checked = checked;
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.lock().clone()
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.state.lock().is_hidden(id)
    }

    pub fn text(&self, id: ElementId) -> String {
        self.state.lock().text(id).to_string()
    }

    pub fn references(&self) -> Vec<ReferenceItem> {
        self.state.lock().references.clone()
    }

    /// Notifications raised so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.state.lock().alerts.clone()
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for MemoryPage {
    fn has_element(&self, id: ElementId) -> bool {
        self.present.contains(&id)
    }

    fn question(&self) -> String {
        self.state.lock().question.clone()
    }

    fn compare_checked(&self) -> bool {
        self.state.lock().compare_checked
    }

    fn set_placeholder(&self, text: &str) {
        self.state.lock().placeholder = text.to_string();
    }

    fn set_hidden(&self, id: ElementId, hidden: bool) {
        let mut state = self.state.lock();
        if hidden {
            state.hidden.insert(id);
        } else {
            state.hidden.remove(&id);
        }
    }

    fn set_text(&self, id: ElementId, text: &str) {
        self.state.lock().texts.insert(id, text.to_string());
    }

    fn clear_references(&self) {
        self.state.lock().references.clear();
    }

    fn append_reference(&self, item: &ReferenceItem) {
        self.state.lock().references.push(item.clone());
    }

    fn scroll_into_view(&self, id: ElementId) {
        self.state.lock().scrolled_to.push(id);
    }

    fn alert(&self, message: &str) {
        tracing::debug!("Alert: {}", message);
        self.state.lock().alerts.push(message.to_string());
    }
}
