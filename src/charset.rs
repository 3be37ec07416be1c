/// A set of characters that a provider accepts in a tag field.
///
/// Each variant is a pure predicate over a single `char`. All sets are
/// bounded by Latin-1: a code point above U+00FF is never a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSet {
    /// Letters, ASCII digits, space and `_ . : / = + - @`.
    Aws,
    /// Printable Latin-1 except `< > * & % ; \ / + ?`.
    AzureKey,
    /// Printable Latin-1.
    AzureValue,
    /// Lowercase letters, other letters, numbers, `_` and `-`.
    GcpInner,
    /// Lowercase letters, other letters and numbers.
    GcpOuter,
}

const AWS_PUNCTUATION: &[char] = &[' ', '_', '.', ':', '/', '=', '+', '-', '@'];

const AZURE_KEY_FORBIDDEN: &[char] = &['<', '>', '*', '&', '%', ';', '\\', '/', '+', '?'];

impl CharSet {
    /// Returns `true` if `c` is a member of this set.
    pub fn contains(self, c: char) -> bool {
        if !is_latin1(c) {
            return false;
        }

        match self {
            CharSet::Aws => {
                c.is_ascii_digit() || c.is_alphabetic() || AWS_PUNCTUATION.contains(&c)
            }
            CharSet::AzureKey => !c.is_control() && !AZURE_KEY_FORBIDDEN.contains(&c),
            CharSet::AzureValue => !c.is_control(),
            CharSet::GcpInner => CharSet::GcpOuter.contains(c) || c == '_' || c == '-',
            // Within Latin-1 the only "other letters" (ª, º) are also lowercase.
            CharSet::GcpOuter => c.is_lowercase() || c.is_numeric(),
        }
    }
}

/// Returns `true` if `c` is in the Latin-1 block (U+0000..=U+00FF).
pub(crate) fn is_latin1(c: char) -> bool {
    u32::from(c) <= 0xFF
}
