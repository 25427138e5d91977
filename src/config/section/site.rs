//! `[site]` section configuration.
//!
//! Where the site is served from; determines the root prefix of every
//! page href.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com/grav"   # path part becomes the root prefix
//! root_prefix = "/grav"              # explicit prefix, wins over url
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::{ValidationErrors, FieldPath};
use crate::config::util::extract_url_path;

/// Site location settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Public site URL.
    pub url: Option<String>,

    /// URL prefix prepended to page hrefs.
    pub root_prefix: Option<String>,
}

impl SiteConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const ROOT_PREFIX: FieldPath = FieldPath::new("site.root_prefix");

    /// Effective root prefix: explicit value, else the path of `url`.
    ///
    /// - `root_prefix = "/grav"` → `/grav`
    /// - `url = "https://example.com/grav/"` → `/grav`
    /// - `url = "https://example.com"` → empty
    pub fn root_prefix(&self) -> String {
        if let Some(prefix) = &self.root_prefix {
            return prefix.clone();
        }
        self.url
            .as_deref()
            .and_then(extract_url_path)
            .filter(|path| !path.is_empty())
            .map(|path| format!("/{path}"))
            .unwrap_or_default()
    }

    pub fn validate(&self, errors: &mut ValidationErrors) {
        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            errors.reject(Self::URL, url, "an absolute URL", "\"https://example.com/blog\"");
        }

        if let Some(prefix) = &self.root_prefix
            && !prefix.is_empty()
            && !prefix.starts_with('/')
            && url::Url::parse(prefix).is_err()
        {
            errors.reject(
                Self::ROOT_PREFIX,
                prefix,
                "a path starting with `/` or an absolute URL",
                format!("\"/{prefix}\""),
            );
        }
    }
}
