//! Whole-document processing.
//!
//! Both passes walk the document line by line, carrying a [`ScanState`] so
//! that fenced code blocks are never touched.
//!
//! - [`rewrite`]: tokens → `[text](href)` markdown links
//! - [`render`]: tokens → `<a href="...">text</a>` anchors

mod fence;
mod render;
mod rewrite;

use regex::Regex;
use std::sync::LazyLock;

pub use fence::ScanState;
pub use render::render_inline;
pub use rewrite::{RewriteReport, rewrite, rewrite_with_report};

/// Output line break; input breaks of any style are normalized to it.
pub const LINE_SEPARATOR: &str = "\n";

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Split on `\r\n`, `\r` and `\n` alike.
///
/// A trailing break yields a final empty line, so joining with
/// [`LINE_SEPARATOR`] restores it.
pub fn split_lines(document: &str) -> impl Iterator<Item = &str> {
    RE_LINE_BREAK.split(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        let lines: Vec<_> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);

        let lines: Vec<_> = split_lines("a\n\nb\n").collect();
        assert_eq!(lines, vec!["a", "", "b", ""]);

        let lines: Vec<_> = split_lines("").collect();
        assert_eq!(lines, vec![""]);
    }
}
