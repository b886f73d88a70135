//! Parse errors for the outer API.
//!
//! Inside the grammar engine there is exactly one failure channel: a
//! production that does not match returns `None` and restores the stream.
//! These error values exist only at the `parse` boundary, where "no match"
//! has to become something a caller can report. The furthest byte offset any
//! production examined is tracked alongside, which points at the rough
//! neighborhood of the problem without changing engine control flow.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No linklet matched. `furthest` is the byte offset of the deepest
    /// token any production looked at before declining.
    #[error("no linklet parsed (deepest mismatch near byte {furthest})")]
    NoLinklet { furthest: usize },

    /// A linklet matched but tokens remain after it.
    #[error("unexpected trailing input at byte {offset}")]
    TrailingInput { offset: usize },
}
