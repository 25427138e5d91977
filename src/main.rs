//! Yalinker - resolve and rewrite `[[...]]` links in markdown documents.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use std::io::{Write, stdout};

use yalinker::cli::{self, Cli, Commands};
use yalinker::config::LinkerConfig;
use yalinker::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = LinkerConfig::load(&cli)?;
    let mut out = stdout().lock();

    match &cli.command {
        Commands::Resolve { args } => cli::resolve::run_resolve(args, &config, &mut out)?,
        Commands::Rewrite { args } => {
            cli::rewrite::run_rewrite(args, &config, &mut out)?;
        }
        Commands::Render { args } => cli::render::run_render(args, &config, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
