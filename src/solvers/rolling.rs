//! Space-optimized dynamic programming.
//!
//! Same recurrence as the full table, but only the previous and current rows
//! are live, swapped after each outer iteration. The inputs are swapped up
//! front so the rolled (row) dimension is the shorter sequence, which bounds
//! the working set at O(min(n,m)). No witness can be recovered from this
//! representation without re-deriving the table, so only the length comes
//! back.

use crate::error::SolveError;
use crate::outcome::LcsOutcome;
use crate::traits::LcsSolver;

pub struct RollingDpSolver;

impl LcsSolver for RollingDpSolver {
    fn name(&self) -> &'static str {
        "dp_rolling"
    }

    fn solve(&self, x: &[u8], y: &[u8]) -> Result<LcsOutcome, SolveError> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("rolling_solve", n = x.len(), m = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        // Rows run along the shorter sequence.
        let (outer, inner) = if x.len() < y.len() { (y, x) } else { (x, y) };
        let m = inner.len();

        let mut prev = vec![0u32; m + 1];
        let mut curr = vec![0u32; m + 1];

        for &cx in outer {
            for j in 1..=m {
                curr[j] = if cx == inner[j - 1] {
                    prev[j - 1] + 1
                } else {
                    curr[j - 1].max(prev[j])
                };
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        Ok(LcsOutcome::length_only(prev[m]))
    }
}
