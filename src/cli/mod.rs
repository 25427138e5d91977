//! Command-line interface module.
//!
//! Stands in for the host around the link core: gathers page context,
//! reads documents, gates and persists rewrites.

mod args;
pub mod common;
pub mod render;
pub mod resolve;
pub mod rewrite;

pub use args::{Cli, Commands, ContextArgs, RenderArgs, ResolveArgs, RewriteArgs};
