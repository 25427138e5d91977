//! URL slugification.
//!
//! Turns titles and multi-segment paths into URL-safe text. Path separators
//! are never touched, so `Blog/Hello World` becomes `blog/hello-world`.

use regex::Regex;
use std::sync::LazyLock;

/// Whitespace and dot runs become a single dash.
static RE_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s.]+").unwrap());

/// Anything outside the slug alphabet.
static RE_INVALID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9/-]").unwrap());

/// A dash hugging a separator (`page./.slug` → `page/slug`).
static RE_DASH_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?/-?").unwrap());

/// Slugify a path, keeping every `/`.
///
/// Unicode is transliterated to ASCII first (`Café` → `cafe`), so the
/// result only ever contains `[a-z0-9/-]`.
///
/// # Examples
/// ```
/// use yalinker::utils::slug::slugify_path;
/// assert_eq!(slugify_path("Hello World"), "hello-world");
/// assert_eq!(slugify_path("page./.slug"), "page/slug");
/// assert_eq!(slugify_path("Über uns"), "uber-uns");
/// ```
pub fn slugify_path(input: &str) -> String {
    let ascii = deunicode::deunicode(input).to_ascii_lowercase();
    let dashed = RE_SPACING.replace_all(&ascii, "-");
    let cleaned = RE_INVALID.replace_all(&dashed, "");
    let joined = RE_DASH_SEPARATOR.replace_all(&cleaned, "/");
    joined.trim_matches('-').to_string()
}
