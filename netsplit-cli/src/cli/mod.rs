//! Command-line interface orchestration for netsplit.
//!
//! The CLI takes a single JSON network document, splits it into disconnected
//! subnetworks, and renders the counts (and optionally the membership) of the
//! result.

mod commands;

pub use commands::{
    Cli, CliError, ExecutionSummary, StrategyArg, render_members, render_summary, run_cli,
};
