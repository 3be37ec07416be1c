//! Normalization and validation of cloud resource tags.
//!
//! Cloud providers restrict the characters, length and shape of the
//! key/value tags that can be attached to resources. This crate turns
//! free-form, possibly non-ASCII user input into tags a provider accepts,
//! and reports why a tag would be rejected:
//! - **Normalization** strips diacritics and replaces every character the
//!   provider does not accept with a substitution character. It never fails
//!   and is idempotent, so repeated deployments do not drift.
//! - **Validation** checks a string as given and reports the first
//!   violation, always in the order emptiness, length, character set,
//!   pattern.
//!
//! # Core Types
//!
//! - [`Provider`]: the closed set of supported clouds
//! - [`TagPolicy`]: one provider's rules, exposing the normalize/validate operations
//! - [`Violation`]: why a key or value was rejected
//! - [`Tag`]: a key/value pair, and [`CompliantTag`] for one that passed validation
//! - [`Diagnostic`]: user-facing notes produced by [`TagPolicy::prepare`]
//!
//! # Examples
//!
//! ```
//! use tag_policy::{registry, ViolationKind};
//!
//! let aws = registry::lookup("aws").expect("aws is supported");
//!
//! assert_eq!(aws.normalize_key("+-=.:/@?)"), "+-=.:/@__");
//! assert_eq!(aws.normalize_key("café 🍎"), "cafe _");
//!
//! let err = aws.validate_key("").unwrap_err();
//! assert_eq!(err.kind(), &ViolationKind::EmptyKey);
//!
//! let azure = registry::lookup("azure").expect("azure is supported");
//! assert_eq!(azure.normalize_value("café 🍎?"), "cafe _?");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod charset;
mod diagnostic;
mod error;
mod logging;
mod normalize;
mod policy;
mod provider;
pub mod registry;
mod tag;
mod unicode;
mod validate;
mod verified;

#[cfg(test)]
mod test_utils;

pub use charset::CharSet;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, TagField, UnsupportedProvider, Violation, ViolationKind};
pub use policy::{FieldPolicy, Prepared, TagPolicy};
pub use provider::Provider;
pub use tag::Tag;
pub use validate::Grammar;
pub use verified::CompliantTag;

/// Validates `tag` against the policy of the provider called `provider`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedProvider`] for an unknown provider name, or
/// [`Error::Violation`] with the first violation of the tag.
///
/// # Examples
///
/// ```
/// use tag_policy::{validate_for, Error, Tag};
///
/// assert!(validate_for("azure", &Tag::new("team", "data")).is_ok());
///
/// let err = validate_for("aws", &Tag::new("", "data")).unwrap_err();
/// assert!(matches!(err, Error::Violation(_)));
///
/// let err = validate_for("ibm", &Tag::new("team", "data")).unwrap_err();
/// assert!(matches!(err, Error::UnsupportedProvider(_)));
/// ```
pub fn validate_for(provider: &str, tag: &Tag) -> Result<(), Error> {
    registry::lookup(provider)?.validate_tag(tag)?;
    Ok(())
}

/// Normalizes `tag` for the provider called `provider`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedProvider`] for an unknown provider name.
pub fn normalize_for(provider: &str, tag: &Tag) -> Result<Tag, Error> {
    Ok(registry::lookup(provider)?.normalize_tag(tag))
}
