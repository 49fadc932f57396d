//! Netsplit core library.
//!
//! Splits a network, given as a mapping from edge to adjacent edges, into its
//! disconnected subnetworks in a single streaming pass. Components are merged
//! online as soon as an entry shows that they touch, using either a naive or
//! a size-aware merge policy.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled each completed run emits:
//!
//! - `netsplit_entries_total` (counter)
//! - `netsplit_merges_total` (counter)
//! - `netsplit_rehomed_edges_total` (counter)
//! - `netsplit_split_duration_seconds` (histogram, seconds)
//! - `netsplit_subnetworks` (gauge)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod ids;
mod partition;
mod source;
mod splitter;
mod store;
mod strategy;

pub use crate::{
    builder::{DEFAULT_BATCH_SIZE, SplitterBuilder},
    error::{NetsplitError, NetsplitErrorCode, Result, StoreError, StoreErrorCode},
    ids::{ComponentId, EdgeId},
    partition::{Partition, Subnetwork},
    source::{AdjacencyList, AdjacencySource},
    splitter::{
        Progress, ProgressObserver, SilentProgress, SplitOutcome, SplitStats, Splitter,
        TracingProgress, split_with,
    },
    store::{ComponentStore, MergeOutcome},
    strategy::{Candidate, MergeStrategy, NaiveMerge, Orientation, SizeAwareMerge, StrategyKind},
};
