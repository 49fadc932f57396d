use netsplit_core::{AdjacencyList, SplitOutcome, SplitterBuilder, StrategyKind};

/// Two disjoint pairs, listed in both directions.
#[must_use]
pub fn two_pairs() -> AdjacencyList {
    AdjacencyList::from_pairs(
        "two_pairs",
        [(1, vec![2]), (2, vec![1]), (3, vec![4]), (4, vec![3])],
    )
}

/// Runs a fresh splitter with the given strategy and batch size.
pub fn split(source: &AdjacencyList, strategy: StrategyKind, batch_size: usize) -> SplitOutcome {
    SplitterBuilder::new()
        .with_strategy(strategy)
        .with_batch_size(batch_size)
        .build()
        .expect("configuration must be valid")
        .run(source)
        .expect("split must succeed")
}
