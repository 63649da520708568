use crate::harness::{Harness, HarnessConfig};
use crate::traits::LcsSolver;

/// Builder for a [`Harness`] with explicit knobs; unset fields fall back to
/// the defaults (full solver set, exhaustive limit 20).
pub struct HarnessBuilder {
    exhaustive_limit: Option<usize>,
    solvers: Option<Vec<Box<dyn LcsSolver>>>,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            exhaustive_limit: None,
            solvers: None,
        }
    }

    pub fn with_exhaustive_limit(mut self, limit: usize) -> Self {
        self.exhaustive_limit = Some(limit);
        self
    }

    pub fn with_solvers(mut self, solvers: Vec<Box<dyn LcsSolver>>) -> Self {
        self.solvers = Some(solvers);
        self
    }

    pub fn build(self) -> Harness {
        let mut config = HarnessConfig::default();
        if let Some(limit) = self.exhaustive_limit {
            config.exhaustive_limit = limit;
        }
        match self.solvers {
            Some(solvers) => Harness::with_solvers(config, solvers),
            None => Harness::new(config),
        }
    }
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}
