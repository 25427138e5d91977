//! Resolution context and result types.

use serde::Serialize;

// ============================================================================
// Resolution Context & Result
// ============================================================================

/// Snapshot of the page a token is resolved from.
///
/// Supplied by the host per invocation and borrowed read-only by the resolver.
/// Values are used as opaque strings; nothing here is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionContext<'a> {
    /// Current page's route (e.g., /blog/hello)
    pub current_route: &'a str,
    /// Current page's display title
    pub current_title: &'a str,
    /// URL prefix prepended to every page href (e.g., /grav)
    pub root_prefix: &'a str,
}

impl<'a> ResolutionContext<'a> {
    pub const fn new(current_route: &'a str, current_title: &'a str, root_prefix: &'a str) -> Self {
        Self {
            current_route,
            current_title,
            root_prefix,
        }
    }
}

/// Final hyperlink produced by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub href: String,
    pub text: String,
}

impl ResolvedLink {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }

    /// Canonical two-part markdown rendering: `[text](href)`.
    pub fn to_markdown(&self) -> String {
        format!("[{}]({})", self.text, self.href)
    }
}
