//! `[rewrite]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [rewrite]
//! write_markdown_links = true   # persist [[links]] as [text](href)
//! ```
//!
//! Rewriting changes source files in place, so it is off by default.

use serde::{Deserialize, Serialize};

/// Document rewrite settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RewriteConfig {
    /// Write `[[...]]` tokens back as plain markdown links.
    pub write_markdown_links: bool,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_disabled_by_default() {
        assert!(!test_parse_config("").rewrite.write_markdown_links);
    }

    #[test]
    fn test_enable() {
        let config = test_parse_config("[rewrite]\nwrite_markdown_links = true");
        assert!(config.rewrite.write_markdown_links);
    }
}
