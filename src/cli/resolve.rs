//! Resolve command - print the link each token resolves to.

use std::io::Write;

use anyhow::Result;

use crate::cli::ResolveArgs;
use crate::cli::common::PageContext;
use crate::config::LinkerConfig;
use crate::link::{recognize, resolve};

/// Run the resolve command, writing one line per token.
pub fn run_resolve(args: &ResolveArgs, config: &LinkerConfig, out: &mut impl Write) -> Result<()> {
    let page = PageContext::new(&args.context, config, None);
    let ctx = page.as_context();

    for token in &args.tokens {
        let link = resolve(token_body(token), &ctx);
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&link)?)?;
        } else {
            writeln!(out, "{}", link.to_markdown())?;
        }
    }
    Ok(())
}

/// Accept both `[[body]]` and a bare body.
fn token_body(input: &str) -> &str {
    match recognize(input) {
        Some(token) if token.len() == input.len() => token.body(),
        _ => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ContextArgs;

    fn args(tokens: &[&str], json: bool) -> ResolveArgs {
        ResolveArgs {
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
            context: ContextArgs {
                route: Some("/current".to_string()),
                title: Some("Current Page Title".to_string()),
                root_prefix: Some("/grav".to_string()),
            },
            json,
        }
    }

    fn run(args: &ResolveArgs) -> String {
        let mut out = Vec::new();
        run_resolve(args, &LinkerConfig::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_token_body() {
        assert_eq!(token_body("[[page|text]]"), "page|text");
        assert_eq!(token_body("page|text"), "page|text");
        assert_eq!(token_body("[[]]"), "");
        // trailing text: not a lone token, taken verbatim
        assert_eq!(token_body("[[a]] b"), "[[a]] b");
    }

    #[test]
    fn test_markdown_output() {
        let output = run(&args(&["[[page]]", "../page", "|"], false));
        assert_eq!(
            output,
            "[page](/grav/current/page)\n[page](/grav/page)\n[/current](/grav/current)\n"
        );
    }

    #[test]
    fn test_json_output() {
        let output = run(&args(&["mail:a@b.com"], true));
        assert_eq!(output, "{\"href\":\"mailto:a@b.com\",\"text\":\"a@b.com\"}\n");
    }
}
