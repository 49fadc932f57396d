//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use crate::graphs::GraphError;
use netsplit_core::NetsplitError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// Splitter configuration or execution failed.
    #[error("split failed: {0}")]
    Split(#[from] NetsplitError),
}
