//! Rewrite command - persist `[[...]]` tokens as markdown links.
//!
//! ```text
//! yalinker rewrite notes.md          # in place, when enabled in config
//! yalinker rewrite notes.md --force  # in place regardless of config
//! yalinker rewrite notes.md --dry    # print to stdout, file untouched
//! ```

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::RewriteArgs;
use crate::cli::common::PageContext;
use crate::config::LinkerConfig;
use crate::document::{RewriteReport, rewrite_with_report};
use crate::log;

/// What the rewrite command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// `rewrite.write_markdown_links` is off and `--force` was not given.
    Disabled,
    /// The document has no token outside code blocks.
    Unchanged,
    /// `--dry`: the new document went to the output stream.
    Printed(RewriteReport),
    /// The file was overwritten.
    Written(RewriteReport),
}

/// Run the rewrite command.
pub fn run_rewrite(
    args: &RewriteArgs,
    config: &LinkerConfig,
    out: &mut impl Write,
) -> Result<RewriteOutcome> {
    if !args.dry && !args.force && !config.rewrite.write_markdown_links {
        log!("rewrite"; "disabled by config, pass --force to rewrite anyway");
        return Ok(RewriteOutcome::Disabled);
    }

    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let page = PageContext::new(&args.context, config, Some(&args.file));
    let report = rewrite_with_report(&source, &page.as_context());

    let Some(text) = report.text.as_deref() else {
        log!("rewrite"; "no links in {}", args.file.display());
        return Ok(RewriteOutcome::Unchanged);
    };

    if args.dry {
        writeln!(out, "{text}")?;
        return Ok(RewriteOutcome::Printed(report));
    }

    fs::write(&args.file, text)
        .with_context(|| format!("failed to write {}", args.file.display()))?;
    log!(
        "rewrite";
        "{}: {} link(s) on {} line(s)",
        args.file.display(),
        report.links_rewritten,
        report.lines_changed
    );
    Ok(RewriteOutcome::Written(report))
}
