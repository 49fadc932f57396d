//! Unit tests for the single-pass splitter.

use std::num::NonZeroUsize;

use rstest::rstest;

use super::*;
use crate::{
    EdgeId, NetsplitError, NetsplitErrorCode, StoreErrorCode,
    source::AdjacencyList,
    strategy::{NaiveMerge, Orientation, SizeAwareMerge},
};

fn edges(ids: &[u64]) -> Vec<EdgeId> {
    ids.iter().copied().map(EdgeId::new).collect()
}

fn batch(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size).expect("batch size must be non-zero")
}

fn split(strategy: StrategyKind, source: &AdjacencyList) -> SplitOutcome {
    crate::SplitterBuilder::new()
        .with_strategy(strategy)
        .build()
        .expect("default configuration is valid")
        .run(source)
        .expect("split must succeed")
}

/// Chain `k -> k + 1` for `k` in `1..length`, listing even keys before odd
/// ones. Every odd entry then finds its own side already large and its
/// neighbour in a fresh pair, which is the worst case for [`NaiveMerge`].
fn interleaved_chain(length: u64) -> AdjacencyList {
    let evens = (1..length).filter(|k| k % 2 == 0);
    let odds = (1..length).filter(|k| k % 2 == 1);
    AdjacencyList::from_pairs("chain", evens.chain(odds).map(|k| (k, vec![k + 1])))
}

#[rstest]
#[case::two_pairs(
    vec![(1, vec![2]), (2, vec![1]), (3, vec![4]), (4, vec![3])],
    vec![vec![1, 2], vec![3, 4]],
)]
#[case::cycle(vec![(1, vec![2]), (2, vec![3]), (3, vec![1])], vec![vec![1, 2, 3]])]
#[case::isolated(vec![(1, vec![])], vec![vec![1]])]
#[case::self_loop(vec![(7, vec![7])], vec![vec![7]])]
#[case::neighbour_only_edges(vec![(1, vec![5, 6]), (2, vec![6])], vec![vec![1, 2, 5, 6]])]
#[case::duplicate_neighbours(vec![(1, vec![2, 2, 2])], vec![vec![1, 2]])]
fn splits_into_expected_subnetworks(
    #[case] pairs: Vec<(u64, Vec<u64>)>,
    #[case] expected: Vec<Vec<u64>>,
    #[values(StrategyKind::Naive, StrategyKind::SizeAware)] strategy: StrategyKind,
) {
    let source = AdjacencyList::from_pairs("case", pairs);
    let outcome = split(strategy, &source);
    let expected: Vec<Vec<EdgeId>> = expected.iter().map(|set| edges(set)).collect();
    assert_eq!(outcome.partition.canonical(), expected);
    assert_eq!(outcome.stats.entries, source.len());
    assert_eq!(outcome.stats.edges, source.edge_universe().len());
}

#[rstest]
fn empty_source_yields_empty_partition() {
    let source = AdjacencyList::new("empty");
    let outcome = split(StrategyKind::SizeAware, &source);
    assert!(outcome.partition.is_empty());
    assert_eq!(
        outcome.stats,
        SplitStats {
            elapsed: outcome.stats.elapsed,
            ..SplitStats::default()
        }
    );
}

#[rstest]
fn refreshes_from_component_after_it_is_absorbed() {
    // Entry 1 first merges {1} into {2, 3} under the naive policy. Neighbour
    // 4 then belongs to another component and must be merged against the
    // survivor rather than the retired singleton.
    let source =
        AdjacencyList::from_pairs("stale", [(2, vec![3]), (4, vec![5]), (1, vec![2, 4, 3])]);
    let outcome = split(StrategyKind::Naive, &source);
    assert_eq!(outcome.partition.canonical(), vec![edges(&[1, 2, 3, 4, 5])]);
    assert_eq!(outcome.stats.merges, 2);
}

#[rstest]
fn interleaved_chain_costs_naive_quadratic_rehoming() {
    let source = interleaved_chain(100);
    let naive = split(StrategyKind::Naive, &source);
    let size_aware = split(StrategyKind::SizeAware, &source);

    for outcome in [&naive, &size_aware] {
        assert_eq!(outcome.partition.len(), 1);
        assert_eq!(outcome.partition.edge_count(), 100);
        assert_eq!(outcome.stats.merges, 49);
    }
    // Naive re-homes the growing side each time: 1 + 3 + ... + 97.
    assert_eq!(naive.stats.rehomed_edges, 2_401);
    // Size-aware re-homes the singleton once, then one pair per merge.
    assert_eq!(size_aware.stats.rehomed_edges, 97);
    assert!(size_aware.stats.rehomed_edges < naive.stats.rehomed_edges);
}

#[rstest]
fn reverse_chain_is_a_single_subnetwork() {
    let source = AdjacencyList::from_pairs("reverse", (1..100).rev().map(|k| (k, vec![k + 1])));
    for strategy in [StrategyKind::Naive, StrategyKind::SizeAware] {
        let outcome = split(strategy, &source);
        assert_eq!(outcome.partition.len(), 1);
        assert_eq!(outcome.partition.edge_count(), 100);
        assert!(outcome.stats.rehomed_edges <= 99);
    }
}

#[rstest]
#[case(1, vec![1, 2, 3, 4, 5])]
#[case(2, vec![2, 4])]
#[case(5, vec![5])]
#[case(6, vec![])]
fn reports_progress_every_batch(#[case] batch_size: usize, #[case] expected: Vec<usize>) {
    let source = AdjacencyList::from_pairs("batches", (1..=5).map(|k| (k, Vec::<u64>::new())));
    let mut store = ComponentStore::new();
    let mut reports = Vec::new();
    split_with(
        &SizeAwareMerge,
        &source,
        &mut store,
        batch(batch_size),
        &mut |progress: &Progress| reports.push(*progress),
    )
    .expect("split must succeed");

    let processed: Vec<usize> = reports.iter().map(|report| report.processed).collect();
    assert_eq!(processed, expected);
    for report in &reports {
        assert_eq!(report.live_components, report.processed);
    }
}

#[rstest]
fn split_with_folds_into_existing_store() {
    let mut store = ComponentStore::new();
    let mut observer = SilentProgress;
    let first = AdjacencyList::from_pairs("first", [(1, vec![2]), (3, vec![4])]);
    let second = AdjacencyList::from_pairs("second", [(2, vec![3])]);

    split_with(&NaiveMerge, &first, &mut store, batch(10), &mut observer)
        .expect("first split must succeed");
    assert_eq!(store.component_count(), 2);
    let stats = split_with(&NaiveMerge, &second, &mut store, batch(10), &mut observer)
        .expect("second split must succeed");

    assert_eq!(store.component_count(), 1);
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.merges, 1);
    assert_eq!(stats.rehomed_edges, 2);
}

/// Policy that names the neighbour's component on both sides.
struct SelfMerging;

impl MergeStrategy for SelfMerging {
    fn orient(&self, _from: Candidate, to: Candidate) -> Orientation {
        Orientation {
            source: to.id,
            destination: to.id,
        }
    }
}

#[rstest]
fn faulty_policy_fails_loudly() {
    let source = AdjacencyList::from_pairs("faulty", [(1, vec![]), (2, vec![1])]);
    let mut store = ComponentStore::new();
    let mut observer = SilentProgress;
    let err = split_with(&SelfMerging, &source, &mut store, batch(10), &mut observer)
        .expect_err("self merge must surface as an error");

    assert!(matches!(err, NetsplitError::ContractViolation { .. }));
    assert_eq!(err.code(), NetsplitErrorCode::ContractViolation);
    assert_eq!(err.store_code(), Some(StoreErrorCode::SelfMerge));
    assert_eq!(store.component_count(), 2);
}
