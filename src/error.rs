use std::fmt;

use crate::provider::Provider;

/// Errors returned by the name-based entry points of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tag key or value does not satisfy the provider's tag policy.
    Violation(Violation),
    /// The requested provider is not in the registry.
    UnsupportedProvider(UnsupportedProvider),
}

impl Error {
    /// Returns the violation, if this error is one.
    pub fn as_violation(&self) -> Option<&Violation> {
        match self {
            Error::Violation(v) => Some(v),
            Error::UnsupportedProvider(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Violation(v) => write!(f, "Tag policy violation: {}", v),
            Error::UnsupportedProvider(u) => write!(f, "{}", u),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Violation(v) => Some(v),
            Error::UnsupportedProvider(u) => Some(u),
        }
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

impl From<UnsupportedProvider> for Error {
    fn from(u: UnsupportedProvider) -> Self {
        Error::UnsupportedProvider(u)
    }
}

/// The part of a tag a violation or diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagField {
    /// The tag key.
    Key,
    /// The tag value.
    Value,
}

impl TagField {
    /// Returns the lowercase field name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagField::Key => "key",
            TagField::Value => "value",
        }
    }
}

impl fmt::Display for TagField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tag policy violation.
///
/// Validation stops at the first failed check, so a `Violation` always
/// describes exactly one reason even when the input breaks several rules.
///
/// # Examples
///
/// ```
/// use tag_policy::{Provider, TagField, ViolationKind};
///
/// let err = Provider::Aws.policy().validate_key("").unwrap_err();
/// assert_eq!(err.kind(), &ViolationKind::EmptyKey);
/// assert_eq!(err.field(), TagField::Key);
/// assert_eq!(err.to_string(), "aws: key must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    provider: Provider,
    field: TagField,
    kind: ViolationKind,
    message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(
        provider: Provider,
        field: TagField,
        kind: ViolationKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            field,
            kind,
            message: message.into(),
        }
    }

    /// Returns the provider whose policy was violated.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Returns the offending field.
    pub fn field(&self) -> TagField {
        self.field
    }

    /// Returns the kind of violation.
    pub fn kind(&self) -> &ViolationKind {
        &self.kind
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.provider, self.message)
    }
}

impl std::error::Error for Violation {}

/// The reason a tag key or value was rejected.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The key is empty.
    EmptyKey,
    /// The value is empty and the policy requires one.
    ///
    /// Reserved for policies that forbid empty values. AWS, Azure and GCP
    /// all accept an empty value, so none of the built-in policies reports it.
    EmptyValue,
    /// The field exceeds the provider's maximum length in bytes.
    TooLong {
        /// Length of the rejected input in bytes
        len: usize,
        /// Maximum length allowed by the provider
        max: usize,
    },
    /// The field contains characters outside Latin-1.
    IllegalCharacterSet,
    /// The field does not match the provider's tag grammar.
    PatternMismatch,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::EmptyKey => write!(f, "empty key"),
            ViolationKind::EmptyValue => write!(f, "empty value"),
            ViolationKind::TooLong { len, max } => write!(f, "too long ({} > {})", len, max),
            ViolationKind::IllegalCharacterSet => write!(f, "illegal character set"),
            ViolationKind::PatternMismatch => write!(f, "pattern mismatch"),
        }
    }
}

/// Error returned when a provider name is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedProvider {
    name: String,
}

impl UnsupportedProvider {
    /// Creates the error for the given provider name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnsupportedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported provider {:?}", self.name)
    }
}

impl std::error::Error for UnsupportedProvider {}
