use std::sync::LazyLock;

use regex::Regex;

use crate::charset::is_latin1;
use crate::error::{TagField, Violation, ViolationKind};
use crate::policy::FieldPolicy;
use crate::provider::Provider;

const AWS_PATTERN: &str = r"^[0-9 _.:/=+\-@\p{L}]*$";
const AZURE_KEY_PATTERN: &str = r"^[^<>*&%;\\/+?\p{Cc}]*$";
const AZURE_VALUE_PATTERN: &str = r"^\P{Cc}*$";
const GCP_PATTERN: &str = r"^([\p{Ll}\p{Lo}\p{N}_-]{0,62}[\p{Ll}\p{Lo}\p{N}])?$";

static AWS_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AWS_PATTERN).expect("AWS tag grammar compiles"));
static AZURE_KEY_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AZURE_KEY_PATTERN).expect("Azure key grammar compiles"));
static AZURE_VALUE_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AZURE_VALUE_PATTERN).expect("Azure value grammar compiles"));
static GCP_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GCP_PATTERN).expect("GCP label grammar compiles"));

/// The canonical grammar a tag field must match in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// AWS tag keys and values.
    Aws,
    /// Azure tag names.
    AzureKey,
    /// Azure tag values.
    AzureValue,
    /// GCP label keys and values.
    Gcp,
}

impl Grammar {
    /// Returns the anchored regular expression source for this grammar.
    pub fn pattern(self) -> &'static str {
        match self {
            Grammar::Aws => AWS_PATTERN,
            Grammar::AzureKey => AZURE_KEY_PATTERN,
            Grammar::AzureValue => AZURE_VALUE_PATTERN,
            Grammar::Gcp => GCP_PATTERN,
        }
    }

    /// Returns `true` if the whole of `s` matches the grammar.
    pub fn is_match(self, s: &str) -> bool {
        let regex: &Regex = match self {
            Grammar::Aws => &AWS_GRAMMAR,
            Grammar::AzureKey => &AZURE_KEY_GRAMMAR,
            Grammar::AzureValue => &AZURE_VALUE_GRAMMAR,
            Grammar::Gcp => &GCP_GRAMMAR,
        };
        regex.is_match(s)
    }
}

/// Checks `s` against one field of a provider policy.
///
/// The checks run in a fixed order and the first failure is returned:
/// emptiness, byte length, Latin-1 repertoire, grammar.
pub(crate) fn validate_field(
    provider: Provider,
    field: TagField,
    rules: &FieldPolicy,
    s: &str,
) -> Result<(), Violation> {
    let violation = |kind, message: String| Violation::new(provider, field, kind, message);

    if s.is_empty() && !rules.allow_empty {
        let kind = match field {
            TagField::Key => ViolationKind::EmptyKey,
            TagField::Value => ViolationKind::EmptyValue,
        };
        return Err(violation(kind, format!("{} must not be empty", field)));
    }

    if s.len() > rules.max_len {
        return Err(violation(
            ViolationKind::TooLong {
                len: s.len(),
                max: rules.max_len,
            },
            format!(
                "{} length {} exceeds maximum of {}",
                field,
                s.len(),
                rules.max_len
            ),
        ));
    }

    if !s.chars().all(is_latin1) {
        return Err(violation(
            ViolationKind::IllegalCharacterSet,
            format!("{} contains non-latin1 characters", field),
        ));
    }

    if !rules.grammar.is_match(s) {
        return Err(violation(
            ViolationKind::PatternMismatch,
            format!(
                "{} does not match pattern \"{}\"",
                field,
                rules.grammar.pattern()
            ),
        ));
    }

    Ok(())
}
