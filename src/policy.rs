use crate::charset::CharSet;
use crate::diagnostic::{Diagnostic, Severity};
use crate::error::{TagField, Violation};
use crate::logging::PolicyLog;
use crate::normalize::normalize_field;
use crate::provider::Provider;
use crate::tag::Tag;
use crate::validate::{validate_field, Grammar};
use crate::verified::CompliantTag;

/// Rules for one field (key or value) of a provider's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    pub(crate) max_len: usize,
    pub(crate) allow_empty: bool,
    pub(crate) charset: CharSet,
    pub(crate) trim: Option<CharSet>,
    pub(crate) grammar: Grammar,
}

impl FieldPolicy {
    /// Returns the maximum length in UTF-8 bytes (inclusive).
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns whether an empty string is accepted.
    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    /// Returns the characters normalization keeps.
    pub fn charset(&self) -> CharSet {
        self.charset
    }

    /// Returns the set that normalized output must start and end with, if any.
    pub fn trim(&self) -> Option<CharSet> {
        self.trim
    }

    /// Returns the grammar the whole field must match.
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }
}

pub(crate) static AWS: TagPolicy = TagPolicy {
    provider: Provider::Aws,
    substitute: '_',
    key: FieldPolicy {
        max_len: 127,
        allow_empty: false,
        charset: CharSet::Aws,
        trim: None,
        grammar: Grammar::Aws,
    },
    value: FieldPolicy {
        max_len: 255,
        allow_empty: true,
        charset: CharSet::Aws,
        trim: None,
        grammar: Grammar::Aws,
    },
};

pub(crate) static AZURE: TagPolicy = TagPolicy {
    provider: Provider::Azure,
    substitute: '_',
    key: FieldPolicy {
        max_len: 512,
        allow_empty: false,
        charset: CharSet::AzureKey,
        trim: None,
        grammar: Grammar::AzureKey,
    },
    value: FieldPolicy {
        max_len: 256,
        allow_empty: true,
        charset: CharSet::AzureValue,
        trim: None,
        grammar: Grammar::AzureValue,
    },
};

pub(crate) static GCP: TagPolicy = TagPolicy {
    provider: Provider::Gcp,
    substitute: '_',
    key: FieldPolicy {
        max_len: 63,
        allow_empty: false,
        charset: CharSet::GcpInner,
        trim: Some(CharSet::GcpOuter),
        grammar: Grammar::Gcp,
    },
    value: FieldPolicy {
        max_len: 63,
        allow_empty: true,
        charset: CharSet::GcpInner,
        trim: Some(CharSet::GcpOuter),
        grammar: Grammar::Gcp,
    },
};

/// The tag policy of one cloud provider.
///
/// `TagPolicy` is the entry point for normalizing and validating tags.
/// Instances are immutable `static` data obtained from
/// [`Provider::policy`] or [`registry::lookup`](crate::registry::lookup),
/// and can be shared freely between threads.
///
/// Normalization and validation are independent: validating never
/// normalizes, and normalizing never fails.
///
/// # Examples
///
/// ```
/// use tag_policy::{Provider, ViolationKind};
///
/// let aws = Provider::Aws.policy();
///
/// let key = aws.normalize_key("café 🍎");
/// assert_eq!(key, "cafe _");
/// assert!(aws.validate_key(&key).is_ok());
///
/// let err = aws.validate_key("????").unwrap_err();
/// assert_eq!(err.kind(), &ViolationKind::PatternMismatch);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct TagPolicy {
    provider: Provider,
    substitute: char,
    key: FieldPolicy,
    value: FieldPolicy,
}

impl TagPolicy {
    /// Returns the provider this policy belongs to.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Returns the character that replaces illegal characters.
    pub fn substitute(&self) -> char {
        self.substitute
    }

    /// Returns the rules for `field`.
    pub fn field(&self, field: TagField) -> &FieldPolicy {
        match field {
            TagField::Key => &self.key,
            TagField::Value => &self.value,
        }
    }

    /// Rewrites `key` into a string made only of characters legal in keys.
    ///
    /// Length is not adjusted, so the result may still be too long, and an
    /// empty result is possible.
    pub fn normalize_key(&self, key: &str) -> String {
        self.normalize(TagField::Key, key)
    }

    /// Rewrites `value` into a string made only of characters legal in values.
    pub fn normalize_value(&self, value: &str) -> String {
        self.normalize(TagField::Value, value)
    }

    /// Checks `key` against the key rules.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in the order: emptiness, length,
    /// character set, pattern.
    pub fn validate_key(&self, key: &str) -> Result<(), Violation> {
        self.validate(TagField::Key, key)
    }

    /// Checks `value` against the value rules.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in the order: emptiness, length,
    /// character set, pattern.
    pub fn validate_value(&self, value: &str) -> Result<(), Violation> {
        self.validate(TagField::Value, value)
    }

    /// Normalizes both fields of `tag`.
    pub fn normalize_tag(&self, tag: &Tag) -> Tag {
        Tag::new(self.normalize_key(tag.key()), self.normalize_value(tag.value()))
    }

    /// Validates the key of `tag`, then its value.
    ///
    /// # Errors
    ///
    /// Returns the key's violation if there is one, otherwise the value's.
    pub fn validate_tag(&self, tag: &Tag) -> Result<(), Violation> {
        self.validate_key(tag.key())?;
        self.validate_value(tag.value())
    }

    /// Validates `tag` and wraps it as proof of compliance.
    ///
    /// # Errors
    ///
    /// Returns the first violation, as [`validate_tag`](Self::validate_tag) does.
    pub fn verify(&self, tag: Tag) -> Result<CompliantTag, Violation> {
        self.validate_tag(&tag)?;
        Ok(CompliantTag::new_unchecked(self.provider, tag))
    }

    /// Normalizes `tag` and validates the result, collecting diagnostics.
    ///
    /// A warning is recorded for each field normalization changed, and an
    /// error for the violation of the normalized tag, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tag_policy::{Provider, Severity, Tag};
    ///
    /// let prepared = Provider::Azure.policy().prepare(&Tag::new("cost?", "ok"));
    ///
    /// assert_eq!(prepared.tag(), &Tag::new("cost_", "ok"));
    /// assert!(prepared.is_compliant());
    /// assert_eq!(prepared.diagnostics()[0].severity(), Severity::Warning);
    /// ```
    pub fn prepare(&self, tag: &Tag) -> Prepared {
        let normalized = self.normalize_tag(tag);
        let mut diagnostics = Vec::new();

        for (field, before, after) in [
            (TagField::Key, tag.key(), normalized.key()),
            (TagField::Value, tag.value(), normalized.value()),
        ] {
            if before != after {
                diagnostics.push(
                    Diagnostic::new(
                        Severity::Warning,
                        self.provider,
                        field,
                        format!("tag {} was normalized", field),
                    )
                    .with_detail(format!("{:?} became {:?}", before, after)),
                );
            }
        }

        if let Err(violation) = self.validate_tag(&normalized) {
            diagnostics.push(Diagnostic::from(&violation));
        }

        let log = PolicyLog::new(self.provider);
        for diagnostic in &diagnostics {
            log.diagnostic(diagnostic);
        }

        Prepared {
            tag: normalized,
            diagnostics,
        }
    }

    /// Validates every tag, returning the violations in input order.
    ///
    /// At most one violation is reported per tag.
    pub fn check_all<'a, I>(&self, tags: I) -> Vec<Violation>
    where
        I: IntoIterator<Item = &'a Tag>,
    {
        tags.into_iter()
            .filter_map(|tag| self.validate_tag(tag).err())
            .collect()
    }

    fn normalize(&self, field: TagField, s: &str) -> String {
        let out = normalize_field(self.field(field), self.substitute, s);
        if out != s {
            PolicyLog::new(self.provider).normalized(field, s, &out);
        }
        out
    }

    fn validate(&self, field: TagField, s: &str) -> Result<(), Violation> {
        validate_field(self.provider, field, self.field(field), s)
            .inspect_err(|violation| PolicyLog::new(self.provider).rejected(violation))
    }
}

/// A normalized tag together with the diagnostics produced on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    tag: Tag,
    diagnostics: Vec<Diagnostic>,
}

impl Prepared {
    /// Returns the normalized tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the diagnostics, warnings first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if the normalized tag passed validation.
    pub fn is_compliant(&self) -> bool {
        self.diagnostics
            .iter()
            .all(|d| d.severity() != Severity::Error)
    }

    /// Consumes the result and returns the normalized tag.
    pub fn into_tag(self) -> Tag {
        self.tag
    }
}
