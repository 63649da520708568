//! The uniform solver result.
//!
//! All four solvers return [`LcsOutcome`]: a length that is always present,
//! plus a tagged [`OutcomeDetail`] for whatever extra artefact the algorithm
//! can produce. Callers match on the tag (or use the accessors) instead of
//! inspecting dynamic return shapes.

use crate::table::DpTable;

/// Extra artefact attached to a solve result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeDetail {
    /// The solver can only report a length (rolling rows discard the table).
    LengthOnly,
    /// One concrete subsequence achieving the reported length. Not unique:
    /// when several maximal subsequences exist, the solver's tie-break rule
    /// picks one deterministically.
    Witness(Vec<u8>),
    /// The full DP table, kept alive for inspection or printing.
    Table(DpTable),
}

/// Result of one solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsOutcome {
    /// LCS length; deterministic and unique per input pair.
    pub length: u32,
    pub detail: OutcomeDetail,
}

impl LcsOutcome {
    pub fn length_only(length: u32) -> Self {
        Self {
            length,
            detail: OutcomeDetail::LengthOnly,
        }
    }

    pub fn with_witness(length: u32, witness: Vec<u8>) -> Self {
        Self {
            length,
            detail: OutcomeDetail::Witness(witness),
        }
    }

    pub fn with_table(length: u32, table: DpTable) -> Self {
        Self {
            length,
            detail: OutcomeDetail::Table(table),
        }
    }

    /// The witness subsequence, if this solver produced one.
    pub fn witness(&self) -> Option<&[u8]> {
        match &self.detail {
            OutcomeDetail::Witness(w) => Some(w),
            _ => None,
        }
    }

    /// The DP table, if this solver kept it.
    pub fn table(&self) -> Option<&DpTable> {
        match &self.detail {
            OutcomeDetail::Table(t) => Some(t),
            _ => None,
        }
    }
}
