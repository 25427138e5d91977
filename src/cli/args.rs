//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve and rewrite [[wiki links]] in markdown documents
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for yalinker.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve link tokens and print the resulting links
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Rewrite [[links]] in a markdown file as [text](href)
    #[command(visible_alias = "w")]
    Rewrite {
        #[command(flatten)]
        args: RewriteArgs,
    },

    /// Print a markdown file with [[links]] rendered as HTML anchors
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },
}

/// Page context overrides shared by all commands.
///
/// Each value falls back to the `[page]`/`[site]` config, then to a
/// default derived from the input file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Route of the current page (e.g., /blog/post)
    #[arg(short, long)]
    pub route: Option<String>,

    /// Title of the current page, shown by [[]]
    #[arg(short, long)]
    pub title: Option<String>,

    /// URL prefix for page links (e.g., /grav)
    #[arg(short = 'R', long = "root-prefix")]
    pub root_prefix: Option<String>,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Tokens to resolve, either `[[page|text]]` or the bare `page|text`
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Print one JSON object per token instead of a markdown link
    #[arg(short, long)]
    pub json: bool,
}

/// Rewrite command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RewriteArgs {
    /// Markdown file to rewrite in place
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Rewrite even if `rewrite.write_markdown_links` is off
    #[arg(short, long)]
    pub force: bool,

    /// Print the rewritten document instead of saving it
    #[arg(short = 'n', long)]
    pub dry: bool,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Markdown file to render
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    #[command(flatten)]
    pub context: ContextArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rewrite() {
        let cli = Cli::parse_from([
            "yalinker", "-v", "rewrite", "notes.md", "-r", "/blog", "-R", "/grav", "--force",
        ]);
        assert!(cli.verbose);
        let Commands::Rewrite { args } = cli.command else {
            panic!("expected rewrite");
        };
        assert_eq!(args.file, PathBuf::from("notes.md"));
        assert_eq!(args.context.route.as_deref(), Some("/blog"));
        assert_eq!(args.context.root_prefix.as_deref(), Some("/grav"));
        assert!(args.force);
        assert!(!args.dry);
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["yalinker", "resolve", "[[page|text]]", "|", "--json"]);
        let Commands::Resolve { args } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.tokens, vec!["[[page|text]]", "|"]);
        assert!(args.json);
        assert!(args.context.title.is_none());
    }
}
