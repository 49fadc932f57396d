//! Single-pass stream processor that splits a network into subnetworks.
//!
//! Each `(from, neighbours)` entry is handled exactly once:
//!
//! 1. `from` is looked up in the store, creating a singleton component when
//!    it is new.
//! 2. A neighbour without an owner joins `from`'s component directly.
//! 3. A neighbour owned by another component triggers a merge whose direction
//!    is chosen by the [`MergeStrategy`]. The local `from` component is then
//!    refreshed to the survivor so later neighbours of the same entry are
//!    compared against the current owner.
//!
//! Components are merged as soon as they are found to touch, so no second
//! union-find phase is needed once the pass ends.

mod progress;

use std::{
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use tracing::{info, instrument, warn};

use crate::{
    Result,
    error::StoreError,
    ids::ComponentId,
    partition::Partition,
    source::AdjacencySource,
    store::ComponentStore,
    strategy::{Candidate, MergeStrategy, StrategyKind},
};

pub use self::progress::{Progress, ProgressObserver, SilentProgress, TracingProgress};

/// Counters collected over one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitStats {
    /// Entries read from the source.
    pub entries: usize,
    /// Distinct edges seen as keys or neighbours.
    pub edges: usize,
    /// Merges performed.
    pub merges: usize,
    /// Membership index updates performed by merges.
    pub rehomed_edges: u64,
    /// Wall-clock duration of the pass.
    pub elapsed: Duration,
}

/// Result of [`Splitter::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Final subnetworks.
    pub partition: Partition,
    /// Counters describing the pass.
    pub stats: SplitStats,
}

/// Configured entry point for splitting a network.
///
/// # Examples
/// ```
/// use netsplit_core::{AdjacencyList, SplitterBuilder, StrategyKind};
///
/// let cycle = AdjacencyList::from_pairs("cycle", [(1, vec![2]), (2, vec![3]), (3, vec![1])]);
/// let splitter = SplitterBuilder::new()
///     .with_strategy(StrategyKind::Naive)
///     .build()?;
/// let outcome = splitter.run(&cycle)?;
/// assert_eq!(outcome.partition.len(), 1);
/// assert_eq!(outcome.stats.edges, 3);
/// # Ok::<(), netsplit_core::NetsplitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    strategy: StrategyKind,
    batch_size: NonZeroUsize,
    capacity_hint: usize,
}

impl Splitter {
    pub(crate) fn new(
        strategy: StrategyKind,
        batch_size: NonZeroUsize,
        capacity_hint: usize,
    ) -> Self {
        Self {
            strategy,
            batch_size,
            capacity_hint,
        }
    }

    /// Returns the merge strategy used by this splitter.
    #[must_use]
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Returns how many entries are processed between progress reports.
    #[must_use]
    pub fn batch_size(&self) -> NonZeroUsize {
        self.batch_size
    }

    /// Splits `source`, reporting progress through [`TracingProgress`].
    ///
    /// An empty source yields an empty partition.
    ///
    /// # Errors
    /// Returns [`crate::NetsplitError::ContractViolation`] if the component
    /// bookkeeping becomes inconsistent, which indicates a defect rather than
    /// bad input.
    pub fn run<A: AdjacencySource>(&self, source: &A) -> Result<SplitOutcome> {
        self.run_with_observer(source, &mut TracingProgress)
    }

    /// Splits `source`, reporting progress to `observer`.
    ///
    /// # Errors
    /// See [`Splitter::run`].
    #[instrument(
        name = "core.split",
        err,
        skip(self, source, observer),
        fields(
            source = %source.name(),
            entries = source.len(),
            strategy = %self.strategy,
            batch_size = self.batch_size.get(),
        ),
    )]
    pub fn run_with_observer<A, O>(&self, source: &A, observer: &mut O) -> Result<SplitOutcome>
    where
        A: AdjacencySource,
        O: ProgressObserver,
    {
        if source.is_empty() {
            warn!(source = source.name(), "adjacency source is empty");
        }

        info!("detecting disconnected subnetworks");
        let mut store = ComponentStore::with_capacity(self.capacity_hint.max(source.len()));
        let stats = split_with(
            &self.strategy,
            source,
            &mut store,
            self.batch_size,
            observer,
        )?;
        let partition = store.into_partition();

        info!(
            subnetworks = partition.len(),
            merges = stats.merges,
            rehomed_edges = stats.rehomed_edges,
            "subnetworks found"
        );
        #[cfg(feature = "metrics")]
        record_metrics(&stats, partition.len());

        Ok(SplitOutcome { partition, stats })
    }
}

/// Runs one pass over `source`, accumulating components into `store`.
///
/// This is the strategy-generic core behind [`Splitter`]. The store may
/// already hold components from an earlier call; entries are folded into
/// them.
///
/// # Errors
/// Returns [`crate::NetsplitError::ContractViolation`] if a store operation
/// rejects the identities it is given.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
///
/// use netsplit_core::{AdjacencyList, ComponentStore, SilentProgress, SizeAwareMerge, split_with};
///
/// let source = AdjacencyList::from_pairs("demo", [(1, vec![]), (2, vec![3])]);
/// let mut store = ComponentStore::new();
/// let batch = NonZeroUsize::new(25_000).expect("non-zero");
/// let stats = split_with(&SizeAwareMerge, &source, &mut store, batch, &mut SilentProgress)?;
/// assert_eq!(stats.entries, 2);
/// assert_eq!(store.component_count(), 2);
/// # Ok::<(), netsplit_core::NetsplitError>(())
/// ```
pub fn split_with<S, A, O>(
    strategy: &S,
    source: &A,
    store: &mut ComponentStore,
    batch_size: NonZeroUsize,
    observer: &mut O,
) -> Result<SplitStats>
where
    S: MergeStrategy + ?Sized,
    A: AdjacencySource,
    O: ProgressObserver,
{
    let started = Instant::now();
    let rehomed_before = store.rehomed_edges();
    let mut entries = 0_usize;
    let mut merges = 0_usize;

    for (from_edge, neighbours) in source.entries() {
        let mut from_component = store.get_or_create(from_edge);

        for &to_edge in neighbours {
            match store.find(to_edge) {
                None => store.attach(to_edge, from_component)?,
                Some(to_component) if to_component == from_component => {}
                Some(to_component) => {
                    let orientation = strategy.orient(
                        candidate(store, from_component)?,
                        candidate(store, to_component)?,
                    );
                    let outcome = store.merge(orientation.source, orientation.destination)?;
                    merges += 1;
                    from_component = outcome.survivor;
                }
            }
        }

        entries += 1;
        if entries.is_multiple_of(batch_size.get()) {
            observer.on_progress(&Progress {
                processed: entries,
                live_components: store.component_count(),
                elapsed: started.elapsed(),
            });
        }
    }

    Ok(SplitStats {
        entries,
        edges: store.edge_count(),
        merges,
        rehomed_edges: store.rehomed_edges() - rehomed_before,
        elapsed: started.elapsed(),
    })
}

fn candidate(
    store: &ComponentStore,
    id: ComponentId,
) -> core::result::Result<Candidate, StoreError> {
    store
        .size(id)
        .map(|size| Candidate { id, size })
        .ok_or(StoreError::NotLive { component: id })
}

#[cfg(feature = "metrics")]
fn record_metrics(stats: &SplitStats, subnetworks: usize) {
    metrics::counter!("netsplit_entries_total").increment(stats.entries as u64);
    metrics::counter!("netsplit_merges_total").increment(stats.merges as u64);
    metrics::counter!("netsplit_rehomed_edges_total").increment(stats.rehomed_edges);
    metrics::histogram!("netsplit_split_duration_seconds").record(stats.elapsed.as_secs_f64());
    metrics::gauge!("netsplit_subnetworks").set(subnetworks as f64);
}

#[cfg(test)]
mod tests;
