//! Config field path.

use std::fmt;

/// Dotted path of a config field, e.g. `site.url`.
///
/// Sections declare their fields as associated constants:
///
/// ```ignore
/// impl SiteConfig {
///     pub const URL: FieldPath = FieldPath::new("site.url");
/// }
///
/// errors.reject(SiteConfig::URL, url, "an absolute URL", "\"https://example.com\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let field = FieldPath::new("site.root_prefix");
        assert_eq!(field.to_string(), "site.root_prefix");
    }
}
