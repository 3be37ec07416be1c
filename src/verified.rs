use crate::provider::Provider;
use crate::tag::Tag;

/// A tag that has passed validation for one provider.
///
/// `CompliantTag` is proof that both the key and the value satisfied the
/// provider's tag policy at the time of validation. It has no public
/// constructor: the only way to obtain one is
/// [`TagPolicy::verify`](crate::TagPolicy::verify).
///
/// # Examples
///
/// External callers cannot build one directly:
///
/// ```compile_fail
/// use tag_policy::{CompliantTag, Provider, Tag};
///
/// let tag = CompliantTag::new_unchecked(Provider::Aws, Tag::new("k", "v"));
/// ```
///
/// A successful validation hands one out:
///
/// ```
/// use tag_policy::{Provider, Tag};
///
/// let compliant = Provider::Aws
///     .policy()
///     .verify(Tag::new("team", "data"))
///     .expect("tag is compliant");
///
/// assert_eq!(compliant.provider(), Provider::Aws);
/// assert_eq!(compliant.key(), "team");
/// assert_eq!(compliant.into_inner(), Tag::new("team", "data"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompliantTag {
    provider: Provider,
    inner: Tag,
}

impl CompliantTag {
    /// Wraps a tag without validating it.
    ///
    /// Callers must have validated `tag` against `provider`'s policy.
    pub(crate) fn new_unchecked(provider: Provider, tag: Tag) -> Self {
        Self {
            provider,
            inner: tag,
        }
    }

    /// Returns the provider the tag was validated for.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Returns the tag key.
    pub fn key(&self) -> &str {
        self.inner.key()
    }

    /// Returns the tag value.
    pub fn value(&self) -> &str {
        self.inner.value()
    }

    /// Consumes the wrapper and returns the tag.
    pub fn into_inner(self) -> Tag {
        self.inner
    }
}

impl AsRef<Tag> for CompliantTag {
    fn as_ref(&self) -> &Tag {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliant_tag_as_ref_returns_tag() {
        let compliant = CompliantTag::new_unchecked(Provider::Azure, Tag::new("env", "prod"));

        assert_eq!(compliant.as_ref(), &Tag::new("env", "prod"));
        assert_eq!(compliant.key(), "env");
        assert_eq!(compliant.value(), "prod");
    }

    #[test]
    fn compliant_tag_remembers_provider() {
        let compliant = CompliantTag::new_unchecked(Provider::Gcp, Tag::new("env", "prod"));

        assert_eq!(compliant.provider(), Provider::Gcp);
        assert_eq!(compliant.into_inner(), Tag::new("env", "prod"));
    }
}
