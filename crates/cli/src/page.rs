//! Terminal rendition of the question page.
//!
//! State lives in a [`MemoryPage`]; this wrapper prints whenever something
//! the user would see on the web page changes. Results go to stdout,
//! notifications and the loading line to stderr.

use lexask_controller::{ElementId, MemoryPage, Page, PageSnapshot, ReferenceItem};

pub struct TerminalPage {
    inner: MemoryPage,
}

impl TerminalPage {
    pub fn new(compare: bool) -> Self {
        let inner = MemoryPage::new();
        inner.set_compare_checked(compare);
        Self { inner }
    }

    pub fn set_question(&self, question: &str) {
        self.inner.set_question(question);
    }

    pub fn set_compare_checked(&self, checked: bool) {
        self.inner.set_compare_checked(checked);
    }

    pub fn placeholder(&self) -> String {
        self.inner.snapshot().placeholder
    }
}

/// Format the visible part of the results container.
pub fn render_results(snapshot: &PageSnapshot) -> String {
    let mut out = String::new();

    out.push_str("RAG 回答:\n");
    out.push_str(snapshot.text(ElementId::RagAnswer));
    out.push('\n');

    if !snapshot.references.is_empty() {
        out.push_str("\n参考文档:\n");
        for item in &snapshot.references {
            out.push_str(&render_reference(item));
        }
    }

    if !snapshot.is_hidden(ElementId::DirectAnswerContainer) {
        out.push_str("\n直接 LLM 回答:\n");
        out.push_str(snapshot.text(ElementId::DirectAnswer));
        out.push('\n');
    }

    out
}

fn render_reference(item: &ReferenceItem) -> String {
    format!("\n[{}] {}\n{}\n", item.label(), item.score_label(), item.text)
}

impl Page for TerminalPage {
    fn has_element(&self, id: ElementId) -> bool {
        self.inner.has_element(id)
    }

    fn question(&self) -> String {
        self.inner.question()
    }

    fn compare_checked(&self) -> bool {
        self.inner.compare_checked()
    }

    fn set_placeholder(&self, text: &str) {
        self.inner.set_placeholder(text);
    }

    fn set_hidden(&self, id: ElementId, hidden: bool) {
        self.inner.set_hidden(id, hidden);

        if hidden {
            return;
        }
        match id {
            ElementId::Loading => eprintln!("正在处理，请稍候..."),
            ElementId::ResultsContainer => println!("{}", render_results(&self.inner.snapshot())),
            _ => {}
        }
    }

    fn set_text(&self, id: ElementId, text: &str) {
        self.inner.set_text(id, text);
    }

    fn clear_references(&self) {
        self.inner.clear_references();
    }

    fn append_reference(&self, item: &ReferenceItem) {
        self.inner.append_reference(item);
    }

    fn scroll_into_view(&self, id: ElementId) {
        self.inner.scroll_into_view(id);
    }

    fn alert(&self, message: &str) {
        self.inner.alert(message);
        eprintln!("! {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(index: usize, score: f64, text: &str) -> ReferenceItem {
        ReferenceItem {
            index,
            score,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_render_results_without_direct_answer() {
        let page = MemoryPage::new();
        page.set_text(ElementId::RagAnswer, "民事诉讼是……");
        page.append_reference(&item(1, 0.91, "短文本"));

        let out = render_results(&page.snapshot());
        assert!(out.starts_with("RAG 回答:\n民事诉讼是……\n"));
        assert!(out.contains("[参考文档 1] 相关度: 0.91\n短文本\n"));
        assert!(!out.contains("直接 LLM 回答"));
    }

    #[test]
    fn test_render_results_with_visible_direct_answer() {
        let page = MemoryPage::new();
        page.set_text(ElementId::RagAnswer, "rag");
        page.set_text(ElementId::DirectAnswer, "direct");
        page.set_hidden(ElementId::DirectAnswerContainer, false);

        let out = render_results(&page.snapshot());
        assert!(out.ends_with("直接 LLM 回答:\ndirect\n"));
        assert!(!out.contains("参考文档:"));
    }

    #[test]
    fn test_terminal_page_starts_with_compare_state() {
        assert!(TerminalPage::new(true).compare_checked());
        assert!(!TerminalPage::new(false).compare_checked());
    }
}
