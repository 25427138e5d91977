//! Inline render hook.
//!
//! Called by a host's inline text engine at each candidate position. On a
//! match the host emits an anchor and skips `consumed_length` bytes.

use serde::Serialize;

use super::{recognize, resolve};
use crate::core::ResolutionContext;

/// A token recognized at the cursor, resolved and ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineLink {
    /// Bytes of input the token occupies.
    pub consumed_length: usize,
    pub href: String,
    pub text: String,
}

/// Recognize a token at the start of `text_at_cursor` and resolve it.
pub fn try_recognize_and_resolve(
    text_at_cursor: &str,
    ctx: &ResolutionContext<'_>,
) -> Option<InlineLink> {
    let token = recognize(text_at_cursor)?;
    let link = resolve(token.body(), ctx);
    Some(InlineLink {
        consumed_length: token.len(),
        href: link.href,
        text: link.text,
    })
}
