//! Render `[[...]]` tokens as inline HTML anchors.
//!
//! Drives [`try_recognize_and_resolve`] the way a host's inline engine
//! would: probe at every `[`, emit an anchor on a match, skip past it.
//! Everything else is copied through, so the output is still markdown.

use super::{LINE_SEPARATOR, ScanState, split_lines};
use crate::core::ResolutionContext;
use crate::link::try_recognize_and_resolve;
use crate::utils::html::anchor;

/// Replace every token outside fenced code blocks with `<a href>` markup.
pub fn render_inline(document: &str, ctx: &ResolutionContext<'_>) -> String {
    let mut state = ScanState::default();
    let lines: Vec<String> = split_lines(document)
        .map(|line| {
            if state.advance(line) {
                line.to_string()
            } else {
                render_line(line, ctx)
            }
        })
        .collect();
    lines.join(LINE_SEPARATOR)
}

fn render_line(line: &str, ctx: &ResolutionContext<'_>) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(pos) = rest.find('[') {
        out.push_str(&rest[..pos]);
        let cursor = &rest[pos..];
        match try_recognize_and_resolve(cursor, ctx) {
            Some(link) => {
                out.push_str(&anchor(&link.href, &link.text));
                rest = &cursor[link.consumed_length..];
            }
            None => {
                out.push('[');
                rest = &cursor[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: ResolutionContext<'static> =
        ResolutionContext::new("/current", "Current Page Title", "/grav");

    #[test]
    fn test_render_links() {
        assert_eq!(
            render_inline("see [[page]] or [[]]", &CTX),
            r#"see <a href="/grav/current/page">page</a> or <a href="/grav/current">Current Page Title</a>"#
        );
    }

    #[test]
    fn test_render_escapes() {
        assert_eq!(
            render_inline("[[page|<b>&</b>]]", &CTX),
            r#"<a href="/grav/current/page">&lt;b&gt;&amp;&lt;/b&gt;</a>"#
        );
    }

    #[test]
    fn test_render_skips_non_tokens() {
        let input = "[x](y) [single] [[ok]] [[open";
        assert_eq!(
            render_inline(input, &CTX),
            r#"[x](y) [single] <a href="/grav/current/ok">ok</a> [[open"#
        );
    }

    #[test]
    fn test_render_keeps_fences() {
        let input = "```\n[[page]]\n```\n[[page]]";
        assert_eq!(
            render_inline(input, &CTX),
            "```\n[[page]]\n```\n<a href=\"/grav/current/page\">page</a>"
        );
    }

    #[test]
    fn test_render_plain_text() {
        assert_eq!(render_inline("no links\r\nhere", &CTX), "no links\nhere");
    }
}
