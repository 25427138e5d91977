//! Token body → `(href, text)` resolution.
//!
//! # Token Forms
//!
//! With route `/current`, title `Current Page Title` and root prefix `/grav`:
//!
//! | Token | href | text |
//! |-------|------|------|
//! | `[[]]` | `/grav/current` | `Current Page Title` |
//! | `[[\|]]` | `/grav/current` | `/current` |
//! | `[[.\|]]` | `/grav/current` | `.` |
//! | `[[page]]` | `/grav/current/page` | `page` |
//! | `[[page\|]]` | `/grav/current/page` | `page` |
//! | `[[page\|text]]` | `/grav/current/page` | `text` |
//! | `[[../page]]` | `/grav/page` | `page` |
//! | `[[../page\|]]` | `/grav/page` | `../page` |
//! | `[[/a/b//c d]]` | `/grav/a/b-c-d` | `b/c d` |
//! | `[[/a/b//c d\|]]` | `/grav/a/b-c-d` | `/a/b/c d` |
//! | `[[https://x.org]]` | `https://x.org` | `https://x.org` |
//! | `[[mailto:a@b.com]]` | `mailto:a@b.com` | `mailto:a@b.com` |
//! | `[[mail:a@b.com]]` | `mailto:a@b.com` | `a@b.com` |
//!
//! Page references go through a fixed sequence of string rewrites; later
//! steps rely on the partial normalization done by earlier ones.

use regex::Regex;
use std::sync::LazyLock;

use super::token::ParsedToken;
use crate::core::{LinkKind, MAIL, MAILTO, ResolutionContext, ResolvedLink};
use crate::utils::slug::slugify_path;

/// Stand-in for an escaped `//` inside display text.
const ESCAPED_SEPARATOR: char = '\u{0}';

/// Joiner an escaped `//` becomes inside an href.
const ESCAPED_SEPARATOR_HREF: &str = "-";

static RE_DOUBLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/{2,}").unwrap());

/// `a/...../b` → `a/../b`
static RE_DOT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{3,}").unwrap());

/// `a/./././b` → `a/b`
static RE_CURRENT_DIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:/\.)+/").unwrap());

/// Leading run of `/` and `.` up to its last separator, then the suffix.
static RE_LEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)^([/.]*)/(.*)$").unwrap());

/// Resolve a token body against the current page.
///
/// Pure and total: every body yields a link.
pub fn resolve(body: &str, ctx: &ResolutionContext<'_>) -> ResolvedLink {
    let token = ParsedToken::parse(body);

    let kind = LinkKind::parse(token.raw_href);
    let mut link = if kind.is_external() {
        resolve_external(kind.href(), &token)
    } else {
        resolve_page(&token, ctx)
    };

    // mail: → mailto:, hiding the scheme from generated text
    if let Some(address) = link.href.strip_prefix(MAIL).map(str::to_string) {
        link.href = format!("{MAILTO}{address}");
        if !token.has_text()
            && let Some(text) = link.text.strip_prefix(MAIL).map(str::to_string)
        {
            link.text = text;
        }
    }

    link
}

/// Web and mail targets: href verbatim.
fn resolve_external(href: &str, token: &ParsedToken<'_>) -> ResolvedLink {
    let text = token.explicit_text.unwrap_or(href);
    ResolvedLink::new(href, text.strip_suffix('|').unwrap_or(text))
}

/// Page references: resolved against the current route and slugged.
fn resolve_page(token: &ParsedToken<'_>, ctx: &ResolutionContext<'_>) -> ResolvedLink {
    let mut href = token.raw_href.to_string();
    let mut text = token.explicit_text.unwrap_or(token.raw_href).to_string();

    // `//` is a literal slash inside a title, not a folder boundary
    if href.contains("//") {
        href = RE_DOUBLE_SEPARATOR
            .replace_all(&href, ESCAPED_SEPARATOR_HREF)
            .into_owned();
        if !token.has_text() {
            text = RE_DOUBLE_SEPARATOR
                .replace_all(&text, ESCAPED_SEPARATOR.to_string())
                .into_owned();
        }
    }

    href = normalize_dots(href);

    let (base, suffix) = split_lead(&href, ctx.current_route);

    // text set from the context is final; skip leaf extraction below
    let mut text_is_final = token.has_text();
    let suffix = match suffix {
        "" => {
            if !token.has_text() {
                text = if token.show_full_path {
                    base.clone()
                } else {
                    ctx.current_title.to_string()
                };
                text_is_final = true;
            }
            ""
        }
        "." => "",
        other => other,
    };

    let mut path = base;
    if !suffix.is_empty() {
        path.push('/');
        path.push_str(&slugify_path(suffix));
    }

    let path = pop_parents(&path);
    let path = RE_DOUBLE_SEPARATOR.replace_all(&path, "/");
    let href = join_root(ctx.root_prefix, &path);

    if !text_is_final && !token.show_full_path {
        text = leaf(&text).to_string();
    }
    if !token.has_text() {
        text = text.replace(ESCAPED_SEPARATOR, "/");
    }

    ResolvedLink::new(href, text)
}

/// Collapse dot runs and `/./` segments, then drop a leading `./`.
fn normalize_dots(mut href: String) -> String {
    if href.contains("...") {
        href = RE_DOT_RUN.replace_all(&href, "..").into_owned();
    }
    if href.contains("/./") {
        href = RE_CURRENT_DIR.replace_all(&href, "/").into_owned();
    }
    match href.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => href,
    }
}

/// Split a leading `./`, `../..` or `/` run off the href.
///
/// Returns the resolution base and the remaining suffix:
/// - no lead: base is the current route
/// - relative lead (`..`): appended to the current route
/// - absolute lead (`/`): base is empty, the current route is ignored
fn split_lead<'h>(href: &'h str, current_route: &str) -> (String, &'h str) {
    let Some(caps) = RE_LEAD.captures(href) else {
        return (current_route.to_string(), href);
    };
    let (Some(lead), Some(suffix)) = (caps.get(1), caps.get(2)) else {
        return (current_route.to_string(), href);
    };

    let lead = lead.as_str();
    let base = if !lead.is_empty() && !lead.starts_with('/') {
        format!("{current_route}/{lead}")
    } else {
        String::new()
    };
    (base, suffix.as_str())
}

/// Erase every `..` segment together with the one before it.
///
/// Segments are blanked rather than removed so indices stay aligned; a
/// parent already blanked is not popped again. The blanks collapse into
/// single separators afterwards.
fn pop_parents(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').collect();
    for i in 0..segments.len() {
        if segments[i] == ".." {
            segments[i] = "";
            if i > 0 {
                segments[i - 1] = "";
            }
        }
    }
    segments.join("/")
}

/// Prefix the root URL without doubling the separator between them.
///
/// An empty result becomes `/`, the site root. It is never an empty href,
/// which would point at the current page instead.
fn join_root(root_prefix: &str, path: &str) -> String {
    let href = format!("{}{}", root_prefix.trim_end_matches('/'), path);
    if href.is_empty() { "/".to_string() } else { href }
}

/// Last non-empty path component (empty if there is none).
fn leaf(text: &str) -> &str {
    text.rsplit('/').find(|s| !s.is_empty()).unwrap_or("")
}
