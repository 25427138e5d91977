//! Link token recognition.
//!
//! A token opens with `[[` and closes at the nearest `]]` on the same line:
//!
//! ```text
//! see [[page|the page]] and [[../other]]
//!     ^^^^^^^^^^^^^^^^^     ^^^^^^^^^^^^
//! ```
//!
//! Matching is non-greedy, so `[[a]][[b]]` is two tokens.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

const OPEN: &str = "[[";
const CLOSE: &str = "]]";
const ALIAS: char = '|';

/// Any token, anywhere. `.` never crosses a line break.
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[.*?\]\]").unwrap());

/// A token at the very start of the text.
static RE_TOKEN_AT_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[\[.*?\]\]").unwrap());

// ============================================================================
// LinkToken
// ============================================================================

/// A matched `[[...]]` span within its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkToken<'a> {
    /// Byte offset of the opening `[[`.
    pub start: usize,
    /// The full matched text, brackets included.
    pub raw: &'a str,
}

impl<'a> LinkToken<'a> {
    /// Matched length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Byte range covered by the token.
    #[inline]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.start + self.raw.len()
    }

    /// Text between the brackets.
    #[inline]
    pub fn body(&self) -> &'a str {
        &self.raw[OPEN.len()..self.raw.len() - CLOSE.len()]
    }
}

/// Recognize a token starting exactly at the beginning of `text`.
pub fn recognize(text: &str) -> Option<LinkToken<'_>> {
    if !text.starts_with(OPEN) {
        return None;
    }
    RE_TOKEN_AT_START.find(text).map(|m| LinkToken {
        start: 0,
        raw: m.as_str(),
    })
}

/// Find every non-overlapping token in a line, left to right.
pub fn scan_line(line: &str) -> Vec<LinkToken<'_>> {
    RE_TOKEN
        .find_iter(line)
        .map(|m| LinkToken {
            start: m.start(),
            raw: m.as_str(),
        })
        .collect()
}

/// Quick check whether any token syntax occurs in the text.
#[inline]
pub fn contains_token(text: &str) -> bool {
    text.contains(OPEN) && RE_TOKEN.is_match(text)
}

// ============================================================================
// ParsedToken
// ============================================================================

/// A token body split into its href and display parts.
///
/// Grammar: `href` optionally followed by `|text`. Derived purely from the
/// body; no context is involved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    pub raw_href: &'a str,
    /// Explicit display text; `None` unless non-empty.
    pub explicit_text: Option<&'a str>,
    /// Trailing `|` with nothing after it: show the whole path as text.
    pub show_full_path: bool,
}

impl<'a> ParsedToken<'a> {
    /// Split a token body. Total over every input.
    ///
    /// The separator is the first `|` followed by at least one character,
    /// so `a||` is href `a` with text `|`, while `a|` keeps no text and
    /// requests the full path instead.
    pub fn parse(body: &'a str) -> Self {
        let separator = body
            .match_indices(ALIAS)
            .map(|(i, _)| i)
            .find(|&i| i + 1 < body.len());

        if let Some(i) = separator {
            return Self {
                raw_href: &body[..i],
                explicit_text: Some(&body[i + 1..]),
                show_full_path: false,
            };
        }

        match body.strip_suffix(ALIAS) {
            Some(href) => Self {
                raw_href: href,
                explicit_text: None,
                show_full_path: true,
            },
            None => Self {
                raw_href: body,
                explicit_text: None,
                show_full_path: false,
            },
        }
    }

    #[inline]
    pub const fn has_text(&self) -> bool {
        self.explicit_text.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_at_start() {
        let token = recognize("[[page|text]] trailing").unwrap();
        assert_eq!(token.raw, "[[page|text]]");
        assert_eq!(token.start, 0);
        assert_eq!(token.len(), 13);
        assert_eq!(token.body(), "page|text");
    }

    #[test]
    fn test_recognize_is_non_greedy() {
        let token = recognize("[[a]][[b]]").unwrap();
        assert_eq!(token.raw, "[[a]]");
    }

    #[test]
    fn test_recognize_rejects() {
        assert!(recognize("text [[page]]").is_none());
        assert!(recognize("[page]]").is_none());
        assert!(recognize("[[page").is_none());
        assert!(recognize("[[page]").is_none());
        // tokens never span a line break
        assert!(recognize("[[pa\nge]]").is_none());
    }

    #[test]
    fn test_recognize_empty_body() {
        let token = recognize("[[]]").unwrap();
        assert_eq!(token.body(), "");
        assert_eq!(token.len(), 4);
    }

    #[test]
    fn test_scan_line() {
        let line = "see [[a]][[b]] and [[c|d]].";
        let tokens = scan_line(line);
        let spans: Vec<_> = tokens.iter().map(|t| (t.start, t.raw)).collect();
        assert_eq!(spans, vec![(4, "[[a]]"), (9, "[[b]]"), (19, "[[c|d]]")]);
        for token in &tokens {
            assert_eq!(&line[token.span()], token.raw);
        }
    }

    #[test]
    fn test_scan_line_offsets_are_bytes() {
        let line = "ü [[x]]";
        let tokens = scan_line(line);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].start, 3);
        assert_eq!(&line[tokens[0].span()], "[[x]]");
    }

    #[test]
    fn test_scan_line_none() {
        assert!(scan_line("plain [text](url) [[unterminated").is_empty());
    }

    #[test]
    fn test_contains_token() {
        assert!(contains_token("a\n[[b]]\nc"));
        assert!(!contains_token("a [[b\n]] c"));
        assert!(!contains_token("no links"));
    }

    #[test]
    fn test_parse_plain() {
        let token = ParsedToken::parse("page");
        assert_eq!(token.raw_href, "page");
        assert_eq!(token.explicit_text, None);
        assert!(!token.show_full_path);
    }

    #[test]
    fn test_parse_with_text() {
        let token = ParsedToken::parse("page|some text");
        assert_eq!(token.raw_href, "page");
        assert_eq!(token.explicit_text, Some("some text"));
        assert!(!token.show_full_path);

        // only the first usable `|` separates
        let token = ParsedToken::parse("a|b|c");
        assert_eq!(token.raw_href, "a");
        assert_eq!(token.explicit_text, Some("b|c"));
    }

    #[test]
    fn test_parse_show_full_path() {
        for (body, href) in [("page|", "page"), ("|", ""), (".|", "."), ("../page|", "../page")] {
            let token = ParsedToken::parse(body);
            assert_eq!(token.raw_href, href, "href failed for {body:?}");
            assert!(token.show_full_path, "show_full_path failed for {body:?}");
            assert!(!token.has_text());
        }
    }

    #[test]
    fn test_parse_double_bar() {
        let token = ParsedToken::parse("a||");
        assert_eq!(token.raw_href, "a");
        assert_eq!(token.explicit_text, Some("|"));

        let token = ParsedToken::parse("||");
        assert_eq!(token.raw_href, "");
        assert_eq!(token.explicit_text, Some("|"));
    }

    #[test]
    fn test_parse_empty() {
        let token = ParsedToken::parse("");
        assert_eq!(token.raw_href, "");
        assert!(!token.has_text());
        assert!(!token.show_full_path);
    }
}
