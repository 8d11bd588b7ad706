//! Example questions shown as the input placeholder.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "在不定期合伙的情况下，一个合伙人突然退出并清偿了其应当承担份额的合伙债务后，是否有权向其他合伙人追偿？",
    "一个公司购买了一台特种设备，该公司应该对这台设备进行哪些管理和维护措施？",
    "什么是民事诉讼？",
    "行政诉讼中被告的举证责任是什么？",
];

/// Pick an example question for `seed`.
pub fn example_for_seed(seed: u64) -> &'static str {
    EXAMPLE_QUESTIONS[(seed % EXAMPLE_QUESTIONS.len() as u64) as usize]
}

/// Pick an example question at random.
///
/// Seeded from the per-process random hasher keys; good enough for a
/// placeholder.
pub fn random_example() -> &'static str {
    example_for_seed(RandomState::new().build_hasher().finish())
}
