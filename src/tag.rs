/// A key/value pair to attach to a cloud resource.
///
/// Tags have no identity beyond their content and compare by value.
///
/// # Examples
///
/// ```
/// use tag_policy::Tag;
///
/// let tag = Tag::from(("team", "data platform"));
/// assert_eq!(tag.key(), "team");
/// assert_eq!(tag.value(), "data platform");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    /// Creates a tag from a key and a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the tag key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the tag value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Splits the tag into its key and value.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl<'a> From<(&'a str, &'a str)> for Tag {
    fn from((key, value): (&'a str, &'a str)) -> Self {
        Self::new(key, value)
    }
}

impl From<(String, String)> for Tag {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_accessors() {
        let tag = Tag::new("env", "prod");
        assert_eq!(tag.key(), "env");
        assert_eq!(tag.value(), "prod");
        assert_eq!(
            tag.into_parts(),
            ("env".to_string(), "prod".to_string())
        );
    }

    #[test]
    fn tags_compare_by_value() {
        let a = Tag::from(("env", "prod"));
        let b = Tag::from(("env".to_string(), "prod".to_string()));
        assert_eq!(a, b);
        assert_ne!(a, Tag::new("env", "dev"));
    }
}
