//! Projection of references into display items.

use lexask_api::Reference;
use std::borrow::Cow;

/// Longest reference text shown before it is cut.
pub const MAX_REFERENCE_CHARS: usize = 300;

/// Appended to a cut reference text.
pub const ELLIPSIS: &str = "...";

/// A reference as the page shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceItem {
    /// 1-based position in the service's ordering
    pub index: usize,

    /// Score rounded to two decimals
    pub score: f64,

    /// Possibly truncated passage text
    pub text: String,
}

impl ReferenceItem {
    /// Heading shown above the passage.
    pub fn label(&self) -> String {
        format!("参考文档 {}", self.index)
    }

    /// Score badge shown next to the heading.
    pub fn score_label(&self) -> String {
        format!("相关度: {}", format_score(self.score))
    }
}

/// Round a score to two decimals, halves rounding toward positive infinity.
///
/// Matches `Math.round(score * 100) / 100`: 0.005 becomes 0.01 and
/// -0.005 becomes 0.
pub fn round_score(score: f64) -> f64 {
    let hundredths = score * 100.0;
    // `(x + 0.5).floor()` would round 0.49999999999999994 up to 1
    let floor = hundredths.floor();
    let rounded = if hundredths - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / 100.0
}

/// Shortest decimal rendering of a score, e.g. `0.91`, `1`.
pub fn format_score(score: f64) -> String {
    format!("{}", score)
}

/// Cut `text` to [`MAX_REFERENCE_CHARS`] characters plus [`ELLIPSIS`].
///
/// Counts Unicode scalar values, not bytes, and ignores word boundaries.
pub fn truncate_reference(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_REFERENCE_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}

/// Build display items for `references`, keeping their order.
pub fn reference_items(references: &[Reference]) -> Vec<ReferenceItem> {
    references
        .iter()
        .enumerate()
        .map(|(i, reference)| ReferenceItem {
            index: i + 1,
            score: round_score(reference.score),
            text: truncate_reference(&reference.text).into_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_score_examples() {
        assert_eq!(round_score(0.8675), 0.87);
        assert_eq!(round_score(1.0), 1.0);
        assert_eq!(round_score(0.005), 0.01);
        assert_eq!(round_score(0.91), 0.91);
        assert_eq!(round_score(0.0), 0.0);
    }

    #[test]
    fn test_round_score_is_idempotent() {
        for score in [0.8675, 0.5, 0.123, 0.999, 0.004] {
            let once = round_score(score);
            assert_eq!(round_score(once), once);
        }
    }

    #[test]
    fn test_round_score_halves_go_up_for_negatives() {
        // -0.5 hundredths rounds toward +inf, not away from zero
        assert_eq!(round_score(-0.005), 0.0);
    }

    #[test]
    fn test_round_score_just_below_half_rounds_down() {
        let score = 4.999999999999999e-3;
        assert_eq!(score * 100.0, 0.49999999999999994);
        assert_eq!(round_score(score), 0.0);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(round_score(0.91)), "0.91");
        assert_eq!(format_score(round_score(0.8675)), "0.87");
        assert_eq!(format_score(round_score(1.0)), "1");
    }

    #[test]
    fn test_truncate_boundary() {
        let exact = "法".repeat(MAX_REFERENCE_CHARS);
        assert_eq!(truncate_reference(&exact), exact.as_str());

        let over = "法".repeat(MAX_REFERENCE_CHARS + 1);
        let cut = truncate_reference(&over);
        assert_eq!(cut.chars().count(), MAX_REFERENCE_CHARS + ELLIPSIS.len());
        assert!(cut.ends_with(ELLIPSIS));
        assert!(cut.starts_with(&exact));
    }

    #[test]
    fn test_truncate_short_text_is_borrowed() {
        assert!(matches!(truncate_reference("短文本"), Cow::Borrowed("短文本")));
        assert!(matches!(truncate_reference(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_truncate_is_a_hard_cut() {
        let text = format!("{} tail", "word ".repeat(70));
        let cut = truncate_reference(&text);
        let expected: String = text.chars().take(MAX_REFERENCE_CHARS).collect();
        assert_eq!(cut, format!("{}{}", expected, ELLIPSIS));
    }

    #[test]
    fn test_reference_items_keep_order_and_number_from_one() {
        let references = vec![
            Reference {
                text: "第一条".to_string(),
                score: 0.8675,
            },
            Reference {
                text: "第二条".to_string(),
                score: 0.5,
            },
        ];

        let items = reference_items(&references);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].index, 1);
        assert_eq!(items[0].label(), "参考文档 1");
        assert_eq!(items[0].score_label(), "相关度: 0.87");
        assert_eq!(items[1].index, 2);
        assert_eq!(items[1].text, "第二条");
    }
}
