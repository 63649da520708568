//! The uniform solver contract.
//!
//! Every LCS algorithm in this crate is a stateless unit struct implementing
//! [`LcsSolver`]. A solve call is a pure function of the two input sequences:
//! no state is held across invocations and no solver depends on another, so
//! the harness can run them back to back without synchronization.
//!
//! The contract deliberately returns a single result shape
//! ([`LcsOutcome`](crate::LcsOutcome)) regardless of algorithm; solvers that
//! cannot produce a witness or a table say so through the tagged detail
//! field rather than by changing their return type.

use crate::error::SolveError;
use crate::outcome::LcsOutcome;

/// A stateless LCS solver over byte sequences.
///
/// Implementations must handle the degenerate inputs identically: either
/// sequence empty (or both) yields length 0, identical sequences yield the
/// full shared length, and repeated symbols follow standard LCS semantics
/// (ordering and multiplicity matter, e.g. `AAABBB` vs `AABB` is 4, not 2).
pub trait LcsSolver {
    /// Stable identifier used in reports and CSV file names.
    fn name(&self) -> &'static str;

    /// True if the solver's cost is exponential in `|x|`.
    ///
    /// The solver itself does not enforce a practical input cutoff; the
    /// harness reads this flag and applies the configured size guard at the
    /// call site before invoking [`solve`](Self::solve).
    fn exponential(&self) -> bool {
        false
    }

    /// Compute the LCS of `x` and `y`.
    ///
    /// The reported length is deterministic and unique per input pair. A
    /// returned witness is one of possibly several valid maximal
    /// subsequences; each solver's tie-break rule makes its own choice
    /// deterministic across repeated calls.
    fn solve(&self, x: &[u8], y: &[u8]) -> Result<LcsOutcome, SolveError>;
}
