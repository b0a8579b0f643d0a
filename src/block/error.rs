//! Error type for level selection, scan options, and token replay.
//!
//! The match finders themselves cannot fail: every input block is valid and
//! the too-short case is a defined signal, not an error.

use core::fmt;

/// Errors returned by the fallible parts of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapError {
    /// A level outside `1..=3` was requested.
    InvalidLevel(i32),
    /// A block size outside `1..=MAX_STORE_BLOCK_SIZE` was requested.
    InvalidBlockSize(usize),
    /// A match token reaches before the start of the replayed history.
    OffsetBeyondHistory { offset: usize, available: usize },
    /// Replayed output does not reproduce the scanned input.
    VerifyFailed { expected: u64, actual: u64 },
}

impl fmt::Display for SnapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SnapError::InvalidLevel(level) => {
                write!(f, "invalid match-finder level {} (expected 1, 2 or 3)", level)
            }
            SnapError::InvalidBlockSize(size) => {
                write!(f, "invalid block size {} (expected 1..=65535)", size)
            }
            SnapError::OffsetBeyondHistory { offset, available } => write!(
                f,
                "match offset {} reaches before history start ({} bytes available)",
                offset, available
            ),
            SnapError::VerifyFailed { expected, actual } => write!(
                f,
                "replayed tokens do not reproduce input (xxh64 {:016x} != {:016x})",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for SnapError {}
