//! Yalinker - `[[...]]` wiki links for markdown pages.
//!
//! A token such as `[[../archive|Older posts]]` is resolved against the
//! page it appears on into an ordinary hyperlink. Documents can either be
//! rewritten into plain `[text](href)` markdown, or rendered with the
//! links as HTML anchors.
//!
//! ```
//! use yalinker::core::ResolutionContext;
//! use yalinker::link::resolve;
//!
//! let ctx = ResolutionContext::new("/blog/post", "Post", "/grav");
//! let link = resolve("../archive|Older posts", &ctx);
//! assert_eq!(link.href, "/grav/blog/archive");
//! assert_eq!(link.text, "Older posts");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod link;
pub mod logger;
pub mod utils;
