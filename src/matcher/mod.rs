//! Matchers locate markup constructs in raw text.
//!
//! A matcher handles exactly one construct kind. It scans a text snapshot and
//! yields, in source order, the exact literal span of each occurrence together
//! with its parsed [`Construct`]. The [`crate::document`] engine replaces each
//! span with a placeholder token, so matchers see earlier matchers' claims as
//! opaque `{{kind:id}}` tokens and cannot match inside them.
//!
//! # Matcher contract
//!
//! - Matches are ordered by start position and do not overlap.
//! - The returned span is the exact substring to be replaced; it must occur
//!   literally in the scanned text. A span that does not is a contract breach
//!   and fails the whole document ([`crate::MxError::MatchContract`]).
//! - Matchers are stateless and may be invoked repeatedly on different
//!   snapshots of the same document.
//! - No construct syntax may produce text of the form `{{name:N}}` — the
//!   placeholder syntax is reserved, and collisions are not detected.

mod title;

pub use title::TwoLineTitleMatcher;

use crate::types::Construct;

/// One occurrence of a construct in scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The exact literal text that was matched (and will be replaced).
    pub span: String,

    /// The parsed construct the span represents.
    pub construct: Construct,
}

impl Match {
    pub fn new(span: impl Into<String>, construct: Construct) -> Self {
        Self {
            span: span.into(),
            construct,
        }
    }
}

/// Scanner for one construct kind.
pub trait Matcher {
    /// Find all occurrences of this matcher's construct kind in `text`,
    /// ordered by start position, non-overlapping. Zero matches is valid.
    fn find_matches(&self, text: &str) -> Vec<Match>;

    /// Stable identifier used as the placeholder namespace for this kind.
    fn kind_name(&self) -> &'static str;
}
