//! Diacritic removal ahead of character substitution.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes combining marks from `s`.
///
/// The input is canonically decomposed (NFD), every combining mark is
/// dropped, and the remainder is recomposed (NFC). Accented Latin letters
/// therefore survive as their base letter ("é" becomes "e"), while
/// characters whose decomposition contains no marks come back unchanged.
pub(crate) fn strip_marks(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_acute_accent() {
        assert_eq!(strip_marks("café"), "cafe");
    }

    #[test]
    fn strips_marks_from_decomposed_input() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(strip_marks("cafe\u{0301}"), "cafe");
    }

    #[test]
    fn strips_stacked_marks() {
        assert_eq!(strip_marks("ṩ"), "s");
        assert_eq!(strip_marks("Ångström"), "Angstrom");
    }

    #[test]
    fn keeps_characters_without_decomposition() {
        assert_eq!(strip_marks("ßæø 🍎"), "ßæø 🍎");
        assert_eq!(strip_marks("+-=.:/@?)"), "+-=.:/@?)");
    }

    #[test]
    fn recomposes_hangul_syllables() {
        assert_eq!(strip_marks("한국"), "한국");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_marks(""), "");
    }

    #[test]
    fn is_idempotent_on_examples() {
        for input in ["café 🍎", "Ångström", "naïve résumé", "한국", "ṩ"] {
            let once = strip_marks(input);
            assert_eq!(strip_marks(&once), once);
        }
    }
}
