//! Dynamic programming with witness reconstruction.
//!
//! Builds the same table as the standard solver, then walks backward from
//! (n, m): a symbol match emits the symbol and steps diagonally; otherwise
//! the walk moves toward the larger neighbor. On equal neighbors it moves up
//! (decrements i). That tie break decides which of several maximal
//! subsequences comes back and must stay fixed: the witness is part of the
//! deterministic contract.
//!
//! Symbols are emitted in reverse order and reversed once at the end.

use crate::error::SolveError;
use crate::outcome::LcsOutcome;
use crate::table::DpTable;
use crate::traits::LcsSolver;

pub struct BacktrackSolver;

/// Walk `table` backward from (|x|, |y|) and collect one witness.
pub fn reconstruct(x: &[u8], y: &[u8], table: &DpTable) -> Vec<u8> {
    let mut i = x.len();
    let mut j = y.len();
    let mut chars = Vec::with_capacity(table.final_len() as usize);

    while i > 0 && j > 0 {
        if x[i - 1] == y[j - 1] {
            chars.push(x[i - 1]);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    chars.reverse();
    chars
}

impl LcsSolver for BacktrackSolver {
    fn name(&self) -> &'static str {
        "dp_backtrack"
    }

    fn solve(&self, x: &[u8], y: &[u8]) -> Result<LcsOutcome, SolveError> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("backtrack_solve", n = x.len(), m = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = DpTable::build(x, y);
        let length = table.final_len();
        let witness = reconstruct(x, y, &table);
        Ok(LcsOutcome::with_witness(length, witness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::is_subsequence;

    #[test]
    fn classic_example_witness_is_valid() {
        let out = BacktrackSolver.solve(b"ABCBDAB", b"BDCABA").unwrap();
        assert_eq!(out.length, 4);
        let w = out.witness().unwrap();
        assert_eq!(w.len(), 4);
        assert!(is_subsequence(w, b"ABCBDAB"));
        assert!(is_subsequence(w, b"BDCABA"));
    }

    #[test]
    fn witness_matches_reported_length() {
        for (x, y) in [
            (b"AGGTAB".as_slice(), b"GXTXAYB".as_slice()),
            (b"ABCDGH", b"AEDFHR"),
            (b"XMJYAUZ", b"MZJAWXU"),
        ] {
            let out = BacktrackSolver.solve(x, y).unwrap();
            assert_eq!(out.witness().unwrap().len() as u32, out.length);
        }
    }

    #[test]
    fn unique_lcs_is_returned_exactly() {
        let out = BacktrackSolver.solve(b"AAABBB", b"AABB").unwrap();
        assert_eq!(out.length, 4);
        assert_eq!(out.witness().unwrap(), b"AABB");

        let out = BacktrackSolver.solve(b"ABCDEF", b"ABCDEF").unwrap();
        assert_eq!(out.witness().unwrap(), b"ABCDEF");
    }

    #[test]
    fn empty_witness_for_disjoint_or_empty_inputs() {
        assert_eq!(BacktrackSolver.solve(b"", b"").unwrap().witness().unwrap(), b"");
        assert_eq!(
            BacktrackSolver.solve(b"AAAA", b"BBBB").unwrap().witness().unwrap(),
            b""
        );
    }

    #[test]
    fn tie_break_is_deterministic() {
        let first = BacktrackSolver.solve(b"ABCBDAB", b"BDCABA").unwrap();
        let second = BacktrackSolver.solve(b"ABCBDAB", b"BDCABA").unwrap();
        assert_eq!(first, second);
    }
}
