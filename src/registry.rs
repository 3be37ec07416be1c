//! Lookup of provider tag policies by name.
//!
//! The registry is the closed set of [`Provider`] variants, each bound to a
//! `static` [`TagPolicy`]. Nothing is registered at runtime.

use crate::error::UnsupportedProvider;
use crate::policy::TagPolicy;
use crate::provider::Provider;

/// Returns the tag policy for the provider called `name`.
///
/// Names are matched ignoring ASCII case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`UnsupportedProvider`] if no provider has that name.
///
/// # Examples
///
/// ```
/// use tag_policy::{registry, Provider};
///
/// let policy = registry::lookup("aws").expect("aws is supported");
/// assert_eq!(policy.provider(), Provider::Aws);
///
/// assert!(registry::lookup("digitalocean").is_err());
/// ```
pub fn lookup(name: &str) -> Result<&'static TagPolicy, UnsupportedProvider> {
    let provider: Provider = name.parse()?;
    Ok(provider.policy())
}

/// Iterates over every registered tag policy.
pub fn providers() -> impl Iterator<Item = &'static TagPolicy> {
    Provider::ALL.into_iter().map(Provider::policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_bound_policy() {
        assert_eq!(lookup("aws").unwrap().provider(), Provider::Aws);
        assert_eq!(lookup("azure").unwrap().provider(), Provider::Azure);
        assert_eq!(lookup("gcp").unwrap().provider(), Provider::Gcp);
    }

    #[test]
    fn lookup_returns_the_same_instance() {
        let a = lookup("aws").unwrap();
        let b = lookup("AWS").unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, Provider::Aws.policy()));
    }

    #[test]
    fn lookup_rejects_unknown_provider() {
        let err = lookup("alibaba").unwrap_err();
        assert_eq!(err.name(), "alibaba");
        assert!(err.to_string().contains("unsupported provider"));
    }

    #[test]
    fn providers_lists_every_policy_once() {
        let names: Vec<_> = providers().map(|p| p.provider().as_str()).collect();
        assert_eq!(names, ["aws", "azure", "gcp"]);
    }
}
