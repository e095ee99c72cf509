//! Validation problems and the sink they are reported to.
//!
//! The filter never fails a whole document on bad input. Recoverable issues are
//! handed to a [`ProblemSink`] and processing carries on.

/// Category of a reported problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// A recognized option carried a value outside its allowed set.
    InvalidOptionValue,
    /// A required option with no default was absent after validation.
    MissingRequiredOption,
    /// A start token had no terminator after it. Scanning stopped there.
    MalformedBlock,
}

/// A problem found while processing a document.
///
/// `Display` yields the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    /// Value dropped; the option is treated as absent.
    #[error("Invalid value for {key}: '{value}' (valid: {allowed})")]
    InvalidOptionValue {
        key: String,
        value: String,
        allowed: String,
    },

    /// Block skipped.
    #[error("yUML: Missing option: {key}")]
    MissingRequiredOption { key: String },

    /// Pass halted; text from `offset` on was left verbatim.
    #[error("Unterminated [yuml block at byte {offset}")]
    MalformedBlock { offset: usize },
}

impl Problem {
    /// Category of this problem.
    #[must_use]
    pub fn kind(&self) -> ProblemKind {
        match self {
            Self::InvalidOptionValue { .. } => ProblemKind::InvalidOptionValue,
            Self::MissingRequiredOption { .. } => ProblemKind::MissingRequiredOption,
            Self::MalformedBlock { .. } => ProblemKind::MalformedBlock,
        }
    }

    /// Option name the problem refers to, if any.
    #[must_use]
    pub fn option(&self) -> Option<&str> {
        match self {
            Self::InvalidOptionValue { key, .. } | Self::MissingRequiredOption { key } => {
                Some(key)
            }
            Self::MalformedBlock { .. } => None,
        }
    }
}

/// Receiver for problems found during a pass.
pub trait ProblemSink {
    /// Record a problem.
    fn report(&mut self, problem: Problem);
}

impl ProblemSink for Vec<Problem> {
    fn report(&mut self, problem: Problem) {
        self.push(problem);
    }
}

/// Sink that only logs problems as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProblemSink for TracingSink {
    fn report(&mut self, problem: Problem) {
        tracing::warn!(kind = ?problem.kind(), "{problem}");
    }
}
