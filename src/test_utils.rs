//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

use crate::policy::TagPolicy;
use crate::provider::Provider;

/// Characters that exercise every normalization path.
const TRICKY: &[char] = &[
    'é', 'Å', 'ß', 'ª', '²', '?', ')', '/', '<', '_', '-', ' ', '\n', '\u{301}', '\u{a0}', '🍎',
    '한', 'Ω',
];

/// Strings of up to `max_chars` characters, biased towards tag-relevant ones.
pub(crate) fn arb_tag_text(max_chars: usize) -> impl Strategy<Value = String> {
    let ch = prop_oneof![
        3 => prop::char::range('\u{20}', '\u{7e}'),
        2 => prop::char::range('\u{a0}', '\u{ff}'),
        2 => prop::sample::select(TRICKY),
        1 => any::<char>(),
    ];
    prop::collection::vec(ch, 0..=max_chars).prop_map(|chars| chars.into_iter().collect())
}

/// Any registered provider policy.
pub(crate) fn arb_policy() -> impl Strategy<Value = &'static TagPolicy> {
    prop::sample::select(Provider::ALL.to_vec()).prop_map(Provider::policy)
}
