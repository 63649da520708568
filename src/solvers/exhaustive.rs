//! Exhaustive subset enumeration.
//!
//! Walks every subset of X's index positions by ascending bitmask value,
//! materializes the candidate subsequence, and keeps the longest one that is
//! also a subsequence of Y. Ties go to the first candidate found, so the
//! enumeration order fixes which witness is returned.
//!
//! Cost is O(2^n · (n+m)). The solver only rejects inputs it physically
//! cannot enumerate (mask wider than 63 bits); the practical cutoff around
//! n = 20 is the caller's policy, enforced by the harness.

use crate::error::SolveError;
use crate::outcome::LcsOutcome;
use crate::traits::LcsSolver;
use crate::utils::is_subsequence;

/// Widest subset mask a u64 enumeration can cover.
pub const MASK_BITS: usize = 63;

pub struct ExhaustiveSolver;

impl LcsSolver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn exponential(&self) -> bool {
        true
    }

    fn solve(&self, x: &[u8], y: &[u8]) -> Result<LcsOutcome, SolveError> {
        let n = x.len();
        if n > MASK_BITS {
            return Err(SolveError::MaskCapacity {
                len: n,
                max: MASK_BITS,
            });
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("exhaustive_solve", n, m = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut best: Vec<u8> = Vec::new();
        for mask in 0u64..(1u64 << n) {
            let candidate: Vec<u8> = (0..n)
                .filter(|&i| (mask >> i) & 1 == 1)
                .map(|i| x[i])
                .collect();
            // Strictly longer only: equal-length candidates found later lose.
            if candidate.len() > best.len() && is_subsequence(&candidate, y) {
                best = candidate;
            }
        }

        Ok(LcsOutcome::with_witness(best.len() as u32, best))
    }
}
