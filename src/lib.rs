//! Longest Common Subsequence, four ways.
//!
//! This crate implements the LCS problem with four independent solvers that
//! share one contract and trade time for space differently:
//!
//! - [`solvers::exhaustive`]: enumerate all 2^|X| subsets, O(2^n · (n+m)).
//!   Exact and witness-producing, but only feasible for tiny inputs.
//! - [`solvers::standard`]: full (n+1)×(m+1) table, O(n·m) time and space.
//!   Returns the table itself for inspection.
//! - [`solvers::backtrack`]: full table plus backward traversal, O(n·m) time
//!   and space. Returns a concrete witness subsequence.
//! - [`solvers::rolling`]: two rows of length min(n,m)+1, O(n·m) time and
//!   O(min(n,m)) space. Length only.
//!
//! On top of the solvers sits a [`Harness`] that runs each one sequentially
//! over named fixtures, records wall-clock time and RSS delta per run, skips
//! the exhaustive solver above a configurable input-size threshold, and
//! turns per-solver failures into status records instead of aborting.
//!
//! ## Quick start
//! ```
//! use lcs_lab::{solvers::backtrack::BacktrackSolver, LcsSolver};
//!
//! let outcome = BacktrackSolver.solve(b"ABCBDAB", b"BDCABA").unwrap();
//! assert_eq!(outcome.length, 4);
//! let witness = outcome.witness().unwrap();
//! assert_eq!(witness.len(), 4);
//! ```

pub mod builder;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod measure;
pub mod outcome;
pub mod report;
pub mod solvers;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::HarnessBuilder;
pub use crate::error::SolveError;
pub use crate::harness::{Harness, HarnessConfig, RunRecord, RunStatus};
pub use crate::outcome::{LcsOutcome, OutcomeDetail};
pub use crate::table::DpTable;
pub use crate::traits::LcsSolver;
