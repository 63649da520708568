//! Standard tabular dynamic programming.
//!
//! Builds the full (n+1)×(m+1) table and reports the final cell. The table
//! is returned alongside the length so callers can backtrack through it or
//! print it; nothing is recomputed on their behalf.

use crate::error::SolveError;
use crate::outcome::LcsOutcome;
use crate::table::DpTable;
use crate::traits::LcsSolver;

pub struct StandardDpSolver;

impl LcsSolver for StandardDpSolver {
    fn name(&self) -> &'static str {
        "dp_standard"
    }

    fn solve(&self, x: &[u8], y: &[u8]) -> Result<LcsOutcome, SolveError> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("standard_solve", n = x.len(), m = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = DpTable::build(x, y);
        let length = table.final_len();
        Ok(LcsOutcome::with_table(length, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_example_keeps_the_table() {
        let out = StandardDpSolver.solve(b"ABCBDAB", b"BDCABA").unwrap();
        assert_eq!(out.length, 4);
        let table = out.table().unwrap();
        assert_eq!(table.rows(), 8);
        assert_eq!(table.cols(), 7);
        assert_eq!(table.final_len(), 4);
    }

    #[test]
    fn identical_sequences() {
        let out = StandardDpSolver.solve(b"ABCDEF", b"ABCDEF").unwrap();
        assert_eq!(out.length, 6);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(StandardDpSolver.solve(b"", b"").unwrap().length, 0);
        assert_eq!(StandardDpSolver.solve(b"ABCD", b"").unwrap().length, 0);
        assert_eq!(StandardDpSolver.solve(b"AAAA", b"BBBB").unwrap().length, 0);
    }
}
