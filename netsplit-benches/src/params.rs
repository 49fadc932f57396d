//! Benchmark parameter types.

use std::fmt;

use netsplit_core::StrategyKind;

/// Parameters for a single strategy benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SplitBenchParams {
    /// Number of distinct edges in the generated network.
    pub edge_count: u64,
    /// Merge strategy under test.
    pub strategy: StrategyKind,
}

impl fmt::Display for SplitBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.strategy, self.edge_count)
    }
}
