//! Render command - print a document with tokens as HTML anchors.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::RenderArgs;
use crate::cli::common::PageContext;
use crate::config::LinkerConfig;
use crate::debug;
use crate::document::render_inline;

pub fn run_render(args: &RenderArgs, config: &LinkerConfig, out: &mut impl Write) -> Result<()> {
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let page = PageContext::new(&args.context, config, Some(&args.file));
    debug!("render"; "{} as {}", args.file.display(), page.route);

    writeln!(out, "{}", render_inline(&source, &page.as_context()))?;
    Ok(())
}
