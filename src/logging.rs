use crate::diagnostic::{Diagnostic, Severity};
use crate::error::{TagField, Violation};
use crate::provider::Provider;

/// Structured logging for one provider's tag policy.
///
/// Every event carries the provider name and the tag field. Tag contents
/// are only ever logged at `debug` level.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PolicyLog {
    provider: Provider,
}

impl PolicyLog {
    pub(crate) fn new(provider: Provider) -> Self {
        Self { provider }
    }

    /// Logs that normalization rewrote a field.
    pub(crate) fn normalized(&self, field: TagField, input: &str, output: &str) {
        tracing::debug!(
            provider = %self.provider,
            field = %field,
            input,
            output,
            "tag field normalized"
        );
    }

    /// Logs that validation rejected a field.
    pub(crate) fn rejected(&self, violation: &Violation) {
        tracing::debug!(
            provider = %self.provider,
            field = %violation.field(),
            kind = %violation.kind(),
            "tag field rejected"
        );
    }

    /// Emits a prepared-tag diagnostic at the level matching its severity.
    pub(crate) fn diagnostic(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => tracing::warn!(
                provider = %self.provider,
                field = %diagnostic.field(),
                "{}",
                diagnostic.summary()
            ),
            Severity::Error => tracing::error!(
                provider = %self.provider,
                field = %diagnostic.field(),
                "{}",
                diagnostic.summary()
            ),
        }
    }
}
