//! Benchmark support crate for netsplit.
//!
//! Provides synthetic adjacency sources and parameter types used by the
//! Criterion benchmarks comparing merge strategies.

pub mod error;
pub mod graphs;
pub mod params;
