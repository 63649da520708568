//! Measurement and comparison harness.
//!
//! Runs every configured solver sequentially over a case, measuring each
//! call in isolation so the timings do not contaminate one another. The
//! exhaustive solver is skipped, not invoked, once `|X|` exceeds the
//! configured threshold; solver errors become `ERROR` records and the run
//! continues with the remaining solvers.

use sysinfo::System;

use crate::fixtures::Fixture;
use crate::measure::measure;
use crate::solvers::default_solvers;
use crate::traits::LcsSolver;

/// Immutable harness configuration, fixed at construction time.
#[derive(Debug, Clone, Copy)]
pub struct HarnessConfig {
    /// Largest `|X|` for which exponential solvers are still invoked.
    pub exhaustive_limit: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            exhaustive_limit: 20,
        }
    }
}

/// Per-run status, mirrored verbatim into reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Not invoked: the exhaustive size guard fired.
    Skipped,
    Error(String),
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Success)
    }

    /// Report label: `SUCCESS`, `SKIPPED`, or `ERROR: <message>`.
    pub fn label(&self) -> String {
        match self {
            RunStatus::Success => "SUCCESS".to_string(),
            RunStatus::Skipped => "SKIPPED".to_string(),
            RunStatus::Error(msg) => format!("ERROR: {msg}"),
        }
    }
}

/// One (case, algorithm) measurement.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub test: String,
    pub algorithm: &'static str,
    /// Absent for skipped or failed runs.
    pub length: Option<u32>,
    /// Witness, when the solver produced one on a successful run.
    pub witness: Option<Vec<u8>>,
    pub wall_s: f64,
    pub rss_delta_kib: u64,
    pub status: RunStatus,
}

/// Sequential benchmark harness over a fixed solver set.
pub struct Harness {
    config: HarnessConfig,
    solvers: Vec<Box<dyn LcsSolver>>,
    sys: System,
}

impl Harness {
    /// Harness over the full default solver set.
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_solvers(config, default_solvers())
    }

    /// Harness over an explicit solver set (evaluation order preserved).
    pub fn with_solvers(config: HarnessConfig, solvers: Vec<Box<dyn LcsSolver>>) -> Self {
        Self {
            config,
            solvers,
            sys: System::new(),
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn solver_names(&self) -> Vec<&'static str> {
        self.solvers.iter().map(|s| s.name()).collect()
    }

    /// Run every solver on one input pair.
    pub fn run_case(&mut self, name: &str, x: &[u8], y: &[u8]) -> Vec<RunRecord> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("run_case", case = name, n = x.len(), m = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut records = Vec::with_capacity(self.solvers.len());
        for solver in &self.solvers {
            if solver.exponential() && x.len() > self.config.exhaustive_limit {
                records.push(RunRecord {
                    test: name.to_string(),
                    algorithm: solver.name(),
                    length: None,
                    witness: None,
                    wall_s: 0.0,
                    rss_delta_kib: 0,
                    status: RunStatus::Skipped,
                });
                continue;
            }

            let measured = measure(&mut self.sys, || solver.solve(x, y));
            let record = match measured.value {
                Ok(outcome) => RunRecord {
                    test: name.to_string(),
                    algorithm: solver.name(),
                    length: Some(outcome.length),
                    witness: outcome.witness().map(|w| w.to_vec()),
                    wall_s: measured.wall_s,
                    rss_delta_kib: measured.rss_delta_kib,
                    status: RunStatus::Success,
                },
                Err(err) => RunRecord {
                    test: name.to_string(),
                    algorithm: solver.name(),
                    length: None,
                    witness: None,
                    wall_s: measured.wall_s,
                    rss_delta_kib: measured.rss_delta_kib,
                    status: RunStatus::Error(err.to_string()),
                },
            };
            records.push(record);
        }
        records
    }

    /// Run every solver over every fixture, in order.
    pub fn run_fixtures(&mut self, fixtures: &[Fixture]) -> Vec<RunRecord> {
        let mut records = Vec::with_capacity(fixtures.len() * self.solvers.len());
        for fixture in fixtures {
            records.extend(self.run_case(fixture.name, fixture.x, fixture.y));
        }
        records
    }
}
