//! `[[...]]` link tokens.
//!
//! | Module    | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `token`   | Recognize tokens and split their body           |
//! | `resolve` | Body + context → `(href, text)`                 |
//! | `inline`  | Per-cursor render hook for host text engines    |

mod inline;
mod resolve;
mod token;

pub use inline::{InlineLink, try_recognize_and_resolve};
pub use resolve::resolve;
pub use token::{LinkToken, ParsedToken, contains_token, recognize, scan_line};
