//! Configuration utility types.
//!
//! | Module  | Purpose                                 |
//! |---------|-----------------------------------------|
//! | `error` | Load errors and rejected values         |
//! | `field` | Dotted config field paths               |

mod error;
mod field;

pub use error::{ConfigError, InvalidValue, ValidationErrors};
pub use field::FieldPath;
