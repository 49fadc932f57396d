//! Tests for the `Splitter` orchestration API.

mod common;

use netsplit_core::{
    AdjacencyList, DEFAULT_BATCH_SIZE, EdgeId, NetsplitError, SplitterBuilder, StrategyKind,
};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use netsplit_test_support::tracing::RecordingLayer;

#[fixture]
fn chain() -> AdjacencyList {
    AdjacencyList::from_pairs("chain", (1..=9).map(|k| (k, vec![k + 1])))
}

#[rstest]
fn builder_defaults() {
    let builder = SplitterBuilder::new();
    assert_eq!(builder.batch_size(), DEFAULT_BATCH_SIZE);
    assert_eq!(builder.strategy(), StrategyKind::SizeAware);

    let splitter = builder.clone().build().expect("defaults valid");
    assert_eq!(splitter.batch_size().get(), 25_000);
    assert_eq!(splitter.strategy(), StrategyKind::SizeAware);
}

#[rstest]
fn builder_rejects_zero_batch_size() {
    let err = SplitterBuilder::new()
        .with_batch_size(0)
        .build()
        .expect_err("builder must reject zero batch size");
    assert!(matches!(err, NetsplitError::InvalidBatchSize { got: 0 }));
}

#[rstest]
fn capacity_hint_does_not_change_results(chain: AdjacencyList) {
    let hinted = SplitterBuilder::new()
        .with_capacity_hint(1_000_000)
        .build()
        .expect("configuration must be valid")
        .run(&chain)
        .expect("split must succeed");
    let plain = common::split(&chain, StrategyKind::SizeAware, DEFAULT_BATCH_SIZE);
    assert_eq!(hinted.partition.canonical(), plain.partition.canonical());
}

#[rstest]
#[case::naive(StrategyKind::Naive)]
#[case::size_aware(StrategyKind::SizeAware)]
fn two_pairs_split_into_two_subnetworks(#[case] strategy: StrategyKind) {
    let outcome = common::split(&common::two_pairs(), strategy, DEFAULT_BATCH_SIZE);
    assert_eq!(outcome.partition.len(), 2);
    let expected = vec![
        vec![EdgeId::new(1), EdgeId::new(2)],
        vec![EdgeId::new(3), EdgeId::new(4)],
    ];
    assert_eq!(outcome.partition.canonical(), expected);
    let largest = outcome.partition.largest().expect("partition is not empty");
    assert_eq!(largest.len(), 2);
}

#[rstest]
fn run_records_split_span(chain: AdjacencyList) {
    let splitter = SplitterBuilder::new()
        .with_strategy(StrategyKind::Naive)
        .with_batch_size(4)
        .build()
        .expect("configuration must be valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let outcome = tracing::subscriber::with_default(subscriber, || splitter.run(&chain))
        .expect("split must succeed");
    assert_eq!(outcome.partition.len(), 1);

    let span = layer
        .span("core.split")
        .expect("core.split span must exist");
    assert_eq!(span.field("source"), Some("chain"));
    assert_eq!(span.field("entries"), Some("9"));
    assert_eq!(span.field("strategy"), Some("naive"));
    assert_eq!(span.field("batch_size"), Some("4"));

    let found = layer
        .event("subnetworks found")
        .expect("completion event must be emitted");
    assert_eq!(found.level, Level::INFO);
    assert_eq!(found.field("subnetworks"), Some("1"));
}

#[rstest]
fn run_emits_progress_events_per_batch(chain: AdjacencyList) {
    let splitter = SplitterBuilder::new()
        .with_batch_size(3)
        .build()
        .expect("configuration must be valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || splitter.run(&chain))
        .expect("split must succeed");

    let progress = layer.events_with_message("entries processed");
    let processed: Vec<&str> = progress
        .iter()
        .filter_map(|event| event.field("processed"))
        .collect();
    assert_eq!(processed, vec!["3", "6", "9"]);
    for event in &progress {
        assert_eq!(event.field("live_components"), Some("1"));
        assert!(event.field("elapsed_ms").is_some());
    }
}

#[rstest]
fn empty_source_warns_and_returns_empty_partition() {
    let splitter = SplitterBuilder::new().build().expect("defaults valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let outcome = tracing::subscriber::with_default(subscriber, || {
        splitter.run(&AdjacencyList::new("nothing"))
    })
    .expect("empty input is not an error");

    assert!(outcome.partition.is_empty());
    let warning = layer
        .event("adjacency source is empty")
        .expect("empty input must be reported");
    assert_eq!(warning.level, Level::WARN);
    assert_eq!(warning.field("source"), Some("nothing"));
}
