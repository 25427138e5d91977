//! Configuration section definitions.
//!
//! Each module corresponds to a section in `yalinker.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `page`    | `[page]`     | Default route and title              |
//! | `rewrite` | `[rewrite]`  | Document rewrite toggle              |
//! | `site`    | `[site]`     | Site URL and root prefix             |

mod page;
mod rewrite;
mod site;

pub use page::PageConfig;
pub use rewrite::RewriteConfig;
pub use site::SiteConfig;
