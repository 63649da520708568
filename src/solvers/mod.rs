//! The four LCS solvers.
//!
//! Each solver is an independent, stateless unit struct implementing
//! [`LcsSolver`](crate::LcsSolver). None of them depends on another; the
//! harness invokes them uniformly and compares their outputs.

pub mod backtrack;
pub mod exhaustive;
pub mod rolling;
pub mod standard;

use crate::traits::LcsSolver;

/// The full solver set in harness evaluation order.
pub fn default_solvers() -> Vec<Box<dyn LcsSolver>> {
    vec![
        Box::new(exhaustive::ExhaustiveSolver),
        Box::new(backtrack::BacktrackSolver),
        Box::new(standard::StandardDpSolver),
        Box::new(rolling::RollingDpSolver),
    ]
}
