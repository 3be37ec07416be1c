//! Diagnostics produced while preparing tags for a provider.
//!
//! A [`Diagnostic`] is meant to be surfaced to the person who wrote the tag:
//! it names the provider and the field, and carries a short summary plus an
//! optional detail line.

use std::fmt;

use crate::error::{TagField, Violation};
use crate::provider::Provider;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The tag was changed to make it compliant
    Warning,
    /// The tag cannot be attached as is
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A user-facing note about one field of one tag.
///
/// # Example
///
/// ```
/// use tag_policy::{Diagnostic, Provider, Severity, TagField};
///
/// let diag = Diagnostic::new(
///     Severity::Warning,
///     Provider::Aws,
///     TagField::Key,
///     "tag key was normalized",
/// )
/// .with_detail("\"cost?\" became \"cost_\"");
///
/// assert_eq!(diag.severity(), Severity::Warning);
/// assert_eq!(
///     diag.to_string(),
///     "warning[aws key]: tag key was normalized (\"cost?\" became \"cost_\")"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    provider: Provider,
    field: TagField,
    summary: String,
    detail: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic with required fields.
    pub fn new(
        severity: Severity,
        provider: Provider,
        field: TagField,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            provider,
            field,
            summary: summary.into(),
            detail: None,
        }
    }

    /// Sets the detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Returns the severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the provider the diagnostic applies to.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Returns the field the diagnostic applies to.
    pub fn field(&self) -> TagField {
        self.field
    }

    /// Returns the summary line.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the detail line, if set.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl From<&Violation> for Diagnostic {
    fn from(v: &Violation) -> Self {
        Diagnostic::new(Severity::Error, v.provider(), v.field(), v.message())
            .with_detail(v.kind().to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{} {}]: {}",
            self.severity, self.provider, self.field, self.summary
        )?;

        if let Some(detail) = &self.detail {
            write!(f, " ({})", detail)?;
        }

        Ok(())
    }
}
