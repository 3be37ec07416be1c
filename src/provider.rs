use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedProvider;
use crate::policy::{TagPolicy, AWS, AZURE, GCP};

/// A cloud provider with a known tag policy.
///
/// The set is closed: every variant is bound to exactly one `static`
/// [`TagPolicy`] for the lifetime of the process.
///
/// # Examples
///
/// ```
/// use tag_policy::Provider;
///
/// let provider: Provider = "azure".parse().expect("known provider");
/// assert_eq!(provider, Provider::Azure);
/// assert_eq!(provider.policy().provider(), Provider::Azure);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Amazon Web Services resource tags.
    Aws,
    /// Microsoft Azure resource tags.
    Azure,
    /// Google Cloud labels.
    Gcp,
}

impl Provider {
    /// Every supported provider, in registry order.
    pub const ALL: [Provider; 3] = [Provider::Aws, Provider::Azure, Provider::Gcp];

    /// Returns the canonical lowercase name of the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Azure => "azure",
            Provider::Gcp => "gcp",
        }
    }

    /// Returns the tag policy bound to this provider.
    pub fn policy(self) -> &'static TagPolicy {
        match self {
            Provider::Aws => &AWS,
            Provider::Azure => &AZURE,
            Provider::Gcp => &GCP,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = UnsupportedProvider;

    /// Parses a provider name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnsupportedProvider::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_names_round_trip_through_from_str() {
        for provider in Provider::ALL {
            assert_eq!(provider.as_str().parse::<Provider>(), Ok(provider));
        }
    }

    #[test]
    fn provider_parse_ignores_case_and_whitespace() {
        assert_eq!("AWS".parse::<Provider>(), Ok(Provider::Aws));
        assert_eq!("  Azure\n".parse::<Provider>(), Ok(Provider::Azure));
        assert_eq!("gCp".parse::<Provider>(), Ok(Provider::Gcp));
    }

    #[test]
    fn provider_parse_rejects_unknown_names() {
        let err = "oracle".parse::<Provider>().unwrap_err();
        assert_eq!(err.name(), "oracle");

        assert!("".parse::<Provider>().is_err());
        assert!("aws ec2".parse::<Provider>().is_err());
    }

    #[test]
    fn provider_display_matches_as_str() {
        assert_eq!(Provider::Aws.to_string(), "aws");
        assert_eq!(Provider::Azure.to_string(), "azure");
        assert_eq!(Provider::Gcp.to_string(), "gcp");
    }

    #[test]
    fn provider_policy_is_bound_to_itself() {
        for provider in Provider::ALL {
            assert_eq!(provider.policy().provider(), provider);
        }
    }
}
