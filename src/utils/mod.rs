//! Pure helper functions. No side effects.
//!
//! - [`html`]: HTML escaping (`escape`, `escape_attr`, `anchor`)
//! - [`slug`]: URL slugification (`slugify_path`)

pub mod html;
pub mod slug;
