//! Link classification utilities.

/// Schemes that bypass path resolution entirely.
const WEB_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Short mail scheme, rewritten to [`MAILTO`] after resolution.
pub const MAIL: &str = "mail:";

/// Canonical mail scheme.
pub const MAILTO: &str = "mailto:";

/// Syntactic classification of a token's href part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Web URL (http://, https://), used verbatim.
    Web(&'a str),
    /// Mail link (`mail:` or `mailto:`), used verbatim.
    Mail(&'a str),
    /// Page reference, resolved against the current route.
    Page(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse an href into its syntactic kind.
    #[inline]
    pub fn parse(href: &'a str) -> Self {
        if WEB_SCHEMES.iter().any(|scheme| href.starts_with(scheme)) {
            Self::Web(href)
        } else if href.starts_with(MAIL) || href.starts_with(MAILTO) {
            Self::Mail(href)
        } else {
            Self::Page(href)
        }
    }

    #[inline]
    pub const fn href(&self) -> &'a str {
        match self {
            Self::Web(href) | Self::Mail(href) | Self::Page(href) => *href,
        }
    }

    /// Check if the link skips path resolution.
    #[inline]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::Web(_) | Self::Mail(_))
    }
}
