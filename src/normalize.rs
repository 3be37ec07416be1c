use crate::policy::FieldPolicy;
use crate::unicode::strip_marks;

/// Rewrites `s` into a string made only of characters legal for `rules`.
///
/// Marks are stripped first; every remaining illegal character is then
/// replaced by `substitute`, one for one. Fields with a trim set finally
/// lose leading and trailing characters outside that set.
pub(crate) fn normalize_field(rules: &FieldPolicy, substitute: char, s: &str) -> String {
    let replaced: String = strip_marks(s)
        .chars()
        .map(|c| if rules.charset.contains(c) { c } else { substitute })
        .collect();

    match rules.trim {
        Some(edge) => {
            let trimmed = replaced.trim_matches(|c: char| !edge.contains(c));
            if trimmed.len() == replaced.len() {
                replaced
            } else {
                trimmed.to_string()
            }
        }
        None => replaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharSet;
    use crate::validate::Grammar;

    const AWS_LIKE: FieldPolicy = FieldPolicy {
        max_len: 127,
        allow_empty: false,
        charset: CharSet::Aws,
        trim: None,
        grammar: Grammar::Aws,
    };

    const GCP_LIKE: FieldPolicy = FieldPolicy {
        max_len: 63,
        allow_empty: true,
        charset: CharSet::GcpInner,
        trim: Some(CharSet::GcpOuter),
        grammar: Grammar::Gcp,
    };

    #[test]
    fn legal_input_is_unchanged() {
        assert_eq!(normalize_field(&AWS_LIKE, '_', "1 a b c"), "1 a b c");
    }

    #[test]
    fn each_illegal_character_becomes_one_substitute() {
        assert_eq!(normalize_field(&AWS_LIKE, '_', "a??b"), "a__b");
        assert_eq!(normalize_field(&AWS_LIKE, '_', "+-=.:/@?)"), "+-=.:/@__");
    }

    #[test]
    fn marks_are_stripped_before_substitution() {
        assert_eq!(normalize_field(&AWS_LIKE, '_', "café 🍎"), "cafe _");
    }

    #[test]
    fn substitute_character_is_configurable() {
        assert_eq!(normalize_field(&AWS_LIKE, '-', "a?b"), "a-b");
    }

    #[test]
    fn trim_set_removes_illegal_edges() {
        assert_eq!(normalize_field(&GCP_LIKE, '_', "café 🍎"), "cafe");
        assert_eq!(normalize_field(&GCP_LIKE, '_', "--a-b__"), "a-b");
        assert_eq!(normalize_field(&GCP_LIKE, '_', "a b"), "a_b");
    }

    #[test]
    fn trim_can_empty_the_result() {
        assert_eq!(normalize_field(&GCP_LIKE, '_', "-?-"), "");
        assert_eq!(normalize_field(&GCP_LIKE, '_', "ABC"), "");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_field(&AWS_LIKE, '_', ""), "");
        assert_eq!(normalize_field(&GCP_LIKE, '_', ""), "");
    }
}
