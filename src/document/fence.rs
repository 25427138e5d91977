//! Fenced code block tracking.

use regex::Regex;
use std::sync::LazyLock;

/// A line made only of three or more backticks.
static RE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^`{3,}$").unwrap());

/// Literal-region state carried across the lines of one document scan.
///
/// Two states, `normal` and `literal`; every fence line flips between them.
/// An unclosed fence leaves the rest of the document literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    pub in_literal_region: bool,
}

impl ScanState {
    #[inline]
    pub fn is_fence(line: &str) -> bool {
        RE_FENCE.is_match(line)
    }

    /// Feed the next line. Returns `true` if it must pass through untouched.
    #[inline]
    pub fn advance(&mut self, line: &str) -> bool {
        if Self::is_fence(line) {
            self.in_literal_region = !self.in_literal_region;
        }
        self.in_literal_region
    }
}
