//! Rewrite `[[...]]` tokens into plain markdown links.
//!
//! Keeps documents readable by any markdown parser. Lines inside fenced
//! code blocks are left byte-for-byte untouched.

use std::borrow::Cow;

use super::{LINE_SEPARATOR, ScanState, split_lines};
use crate::core::ResolutionContext;
use crate::debug;
use crate::link::{LinkToken, contains_token, resolve, scan_line};

/// Outcome of a document rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// The new document, `None` when nothing changed.
    pub text: Option<String>,
    /// Lines that contained at least one token.
    pub lines_changed: usize,
    /// Tokens replaced across the whole document.
    pub links_rewritten: usize,
}

impl RewriteReport {
    #[inline]
    pub const fn is_changed(&self) -> bool {
        self.text.is_some()
    }
}

/// Rewrite every token outside fenced code blocks as `[text](href)`.
///
/// Returns `None` when the document has no token to rewrite.
#[inline]
pub fn rewrite(document: &str, ctx: &ResolutionContext<'_>) -> Option<String> {
    rewrite_with_report(document, ctx).text
}

/// Like [`rewrite`], also counting what was replaced.
pub fn rewrite_with_report(document: &str, ctx: &ResolutionContext<'_>) -> RewriteReport {
    let mut report = RewriteReport::default();
    if !contains_token(document) {
        return report;
    }

    let mut state = ScanState::default();
    let mut lines: Vec<Cow<'_, str>> = Vec::new();

    for line in split_lines(document) {
        if state.advance(line) {
            lines.push(Cow::Borrowed(line));
            continue;
        }

        let tokens = scan_line(line);
        if tokens.is_empty() {
            lines.push(Cow::Borrowed(line));
            continue;
        }

        report.lines_changed += 1;
        report.links_rewritten += tokens.len();
        lines.push(Cow::Owned(rewrite_line(line, &tokens, ctx)));
    }

    if state.in_literal_region {
        debug!("rewrite"; "unclosed code fence, rest of document left as is");
    }

    if report.lines_changed > 0 {
        debug!("rewrite"; "{} link(s) on {} line(s)", report.links_rewritten, report.lines_changed);
        report.text = Some(lines.join(LINE_SEPARATOR));
    }
    report
}

/// Splice each token's markdown link into the line.
///
/// Applied right to left, so the offsets of tokens not yet replaced never
/// shift.
fn rewrite_line(line: &str, tokens: &[LinkToken<'_>], ctx: &ResolutionContext<'_>) -> String {
    let mut out = line.to_string();
    for token in tokens.iter().rev() {
        let link = resolve(token.body(), ctx);
        out.replace_range(token.span(), &link.to_markdown());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: ResolutionContext<'static> =
        ResolutionContext::new("/current", "Current Page Title", "/grav");

    #[test]
    fn test_no_tokens() {
        assert_eq!(rewrite("plain text\n[a](b)\n", &CTX), None);
        assert_eq!(rewrite("", &CTX), None);
        // `[[` split across lines is no token
        assert_eq!(rewrite("[[a\n]]", &CTX), None);
    }

    #[test]
    fn test_single_link() {
        assert_eq!(
            rewrite("see [[page]]", &CTX).as_deref(),
            Some("see [page](/grav/current/page)")
        );
    }

    #[test]
    fn test_fenced_block_untouched() {
        let doc = "```\n[[page]]\n```\n[[page]]";
        assert_eq!(
            rewrite(doc, &CTX).as_deref(),
            Some("```\n[[page]]\n```\n[page](/grav/current/page)")
        );
    }

    #[test]
    fn test_only_fenced_tokens() {
        // tokens exist, but all of them are literal
        assert_eq!(rewrite("````\n[[page]]\n````\n", &CTX), None);
    }

    #[test]
    fn test_unclosed_fence() {
        let doc = "[[a]]\n```\n[[b]]\n[[c]]";
        assert_eq!(
            rewrite(doc, &CTX).as_deref(),
            Some("[a](/grav/current/a)\n```\n[[b]]\n[[c]]")
        );
    }

    #[test]
    fn test_reopened_fence() {
        let doc = "```\n[[a]]\n```\n[[b]]\n```\n[[c]]\n```\n[[d]]";
        let out = rewrite(doc, &CTX).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], "[[a]]");
        assert_eq!(lines[3], "[b](/grav/current/b)");
        assert_eq!(lines[5], "[[c]]");
        assert_eq!(lines[7], "[d](/grav/current/d)");
    }

    #[test]
    fn test_fence_with_info_string_is_not_literal() {
        // only bare backtick lines toggle
        let doc = "```rust\n[[page]]\n```";
        let out = rewrite(doc, &CTX).unwrap();
        assert_eq!(out.lines().nth(1), Some("[page](/grav/current/page)"));
    }

    #[test]
    fn test_multiple_links_per_line() {
        let doc = "[[../page]] then [[mail:a@b.com]] and [[|]]";
        assert_eq!(
            rewrite(doc, &CTX).as_deref(),
            Some("[page](/grav/page) then [a@b.com](mailto:a@b.com) and [/current](/grav/current)")
        );
    }

    #[test]
    fn test_adjacent_links() {
        assert_eq!(
            rewrite("[[a]][[b|B]]", &CTX).as_deref(),
            Some("[a](/grav/current/a)[B](/grav/current/b)")
        );
    }

    #[test]
    fn test_unicode_around_links() {
        assert_eq!(
            rewrite("über [[Café]] ñ", &CTX).as_deref(),
            Some("über [Café](/grav/current/cafe) ñ")
        );
    }

    #[test]
    fn test_line_breaks_normalized() {
        let doc = "a\r\n[[b]]\rc\n";
        assert_eq!(
            rewrite(doc, &CTX).as_deref(),
            Some("a\n[b](/grav/current/b)\nc\n")
        );
    }

    #[test]
    fn test_report_counts() {
        let doc = "[[a]] [[b]]\nplain\n[[c]]\n```\n[[d]]\n```";
        let report = rewrite_with_report(doc, &CTX);
        assert!(report.is_changed());
        assert_eq!(report.lines_changed, 2);
        assert_eq!(report.links_rewritten, 3);

        let report = rewrite_with_report("nothing here", &CTX);
        assert!(!report.is_changed());
        assert_eq!(report, RewriteReport::default());
    }

    #[test]
    fn test_rewrite_is_stable() {
        let once = rewrite("[[page]] and [[/x|y]]", &CTX).unwrap();
        assert_eq!(rewrite(&once, &CTX), None);
    }
}
