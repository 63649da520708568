//! Solver error type.

use thiserror::Error;

/// Failure modes of a solve call.
///
/// The algorithms are total over valid byte-sequence pairs, so the only
/// fail-fast condition left is the exhaustive solver's enumeration capacity.
/// Errors propagate directly to the caller; there is no internal retry or
/// fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The exhaustive solver cannot enumerate subsets of an input longer
    /// than its bitmask width.
    #[error("input of length {len} exceeds the {max}-bit subset mask of the exhaustive solver")]
    MaskCapacity { len: usize, max: usize },
}
