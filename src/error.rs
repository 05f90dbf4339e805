//! Error types for answer parsing and the drill loop.

use thiserror::Error;

/// Errors that can occur while parsing a typed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// Input is empty after trimming.
    #[error("no move entered")]
    Empty,
    /// Input is not one of `h`, `st`, `d` or `sp`.
    #[error("unknown move")]
    Unknown,
}

/// Errors that can end a drill session early.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum DrillError {
    /// Reading the answer or writing the prompt failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
