//! `[page]` section configuration.
//!
//! Fallback context for the page being processed, used when the command
//! line does not name one.
//!
//! # Example
//!
//! ```toml
//! [page]
//! route = "/current"
//! title = "Current Page Title"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::{ValidationErrors, FieldPath};

/// Default route and title of the current page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    /// Route relative links resolve against.
    pub route: Option<String>,

    /// Text of `[[]]` links.
    pub title: Option<String>,
}

impl PageConfig {
    pub const ROUTE: FieldPath = FieldPath::new("page.route");

    pub fn validate(&self, errors: &mut ValidationErrors) {
        if let Some(route) = &self.route
            && !route.is_empty()
            && !route.starts_with('/')
        {
            errors.reject(
                Self::ROUTE,
                route,
                "a route starting with `/`",
                format!("\"/{route}\""),
            );
        }
    }
}
