//! Block location within a text buffer.
//!
//! A block starts at `[yuml` at the beginning of a line and ends at the next line
//! starting with `]`. Offsets are byte offsets into the scanned text.

use std::ops::Range;

use crate::consts::{END_TOKEN, START_TOKEN};

/// A delimited block found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block<'a> {
    /// Replaced region: from `[yuml` through the terminating `]`, inclusive.
    pub span: Range<usize>,
    /// Header line and body, up to and including the newline before `]`.
    inner: &'a str,
}

impl<'a> Block<'a> {
    /// The header line, starting with `[yuml`.
    pub fn header(&self) -> &'a str {
        self.inner.split('\n').next().unwrap_or_default()
    }

    /// Raw body lines, in order.
    ///
    /// The region always ends with a newline, so the last item is an empty string.
    pub fn body_lines(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.inner.split('\n').skip(1)
    }
}

/// Result of scanning for the next block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scan<'a> {
    /// A complete block.
    Block(Block<'a>),
    /// A start token with no terminator after it, at this offset.
    Unterminated(usize),
}

/// Find the next block whose start token lies at or after `from`.
///
/// The start token must directly follow a newline, so a block on the very first
/// line of the text is not recognized.
pub(crate) fn next_block(text: &str, from: usize) -> Option<Scan<'_>> {
    let tail = text.get(from..)?;
    let start = from + tail.find(&format!("\n{START_TOKEN}"))? + 1;

    let Some(offset) = text[start..].find(&format!("\n{END_TOKEN}")) else {
        return Some(Scan::Unterminated(start));
    };
    // Position of the `]` itself.
    let close = start + offset + 1;

    Some(Scan::Block(Block {
        span: start..close + END_TOKEN.len(),
        inner: &text[start..close],
    }))
}
