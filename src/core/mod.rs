//! Core types - pure abstractions shared across the codebase.

mod context;
mod link;

pub use context::{ResolutionContext, ResolvedLink};
pub use link::{LinkKind, MAIL, MAILTO};
