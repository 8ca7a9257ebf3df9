//! Structured error types for the islet toolkit.

use thiserror::Error;

/// Unified error type for all islet operations.
///
/// Every failure in this domain is a deterministic validation error: inputs
/// are checked eagerly and no stage produces partial output. There is no
/// transient or retryable failure class.
#[derive(Debug, Error)]
pub enum IsletError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed record markers or invalid residue bytes
    #[error("format error: {0}")]
    Format(String),

    /// Zero-length sequence where a non-empty one is required
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Sequence length does not match the fixed segmentation layout
    #[error("length mismatch: expected {expected} residues, got {actual}")]
    LengthMismatch {
        /// Length the segmentation layout requires.
        expected: usize,
        /// Length actually received.
        actual: usize,
    },

    /// Symbol absent from a reference table
    #[error("unknown symbol '{symbol}' at position {position}")]
    UnknownSymbol {
        /// The offending residue code.
        symbol: char,
        /// Zero-based position within the queried chain.
        position: usize,
    },

    /// Invalid argument (bad scan parameters, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the islet crates.
pub type Result<T> = std::result::Result<T, IsletError>;
