//! Unit tests for the component store.

use rstest::{fixture, rstest};

use super::*;

fn edge(id: u64) -> EdgeId {
    EdgeId::new(id)
}

/// Store holding `{1, 2}` in one component and `{3}` in another.
#[fixture]
fn seeded() -> (ComponentStore, ComponentId, ComponentId) {
    let mut store = ComponentStore::new();
    let pair = store.get_or_create(edge(1));
    store.attach(edge(2), pair).expect("fresh edge must attach");
    let single = store.get_or_create(edge(3));
    (store, pair, single)
}

#[rstest]
fn get_or_create_returns_existing_owner() {
    let mut store = ComponentStore::new();
    let first = store.get_or_create(edge(5));
    let again = store.get_or_create(edge(5));
    assert_eq!(first, again);
    assert_eq!(store.component_count(), 1);
    assert_eq!(store.edge_count(), 1);
    assert_eq!(store.members(first), Some(&[edge(5)][..]));
}

#[rstest]
fn find_has_no_side_effects() {
    let store = ComponentStore::new();
    assert_eq!(store.find(edge(9)), None);
    assert_eq!(store.component_count(), 0);
    assert_eq!(store.edge_count(), 0);
}

#[rstest]
fn attach_rejects_owned_edge(seeded: (ComponentStore, ComponentId, ComponentId)) {
    let (mut store, pair, single) = seeded;
    let err = store
        .attach(edge(1), single)
        .expect_err("owned edge must not attach");
    assert_eq!(
        err,
        StoreError::EdgeAlreadyHomed {
            edge: edge(1),
            owner: pair,
        }
    );
    assert_eq!(store.size(single), Some(1));
}

#[rstest]
fn merge_moves_edges_and_retires_source(seeded: (ComponentStore, ComponentId, ComponentId)) {
    let (mut store, pair, single) = seeded;
    let before = store.component_count();
    let expected_size = store.size(pair).unwrap_or(0) + store.size(single).unwrap_or(0);

    let outcome = store.merge(pair, single).expect("merge must succeed");

    assert_eq!(outcome.survivor, single);
    assert_eq!(outcome.retired, pair);
    assert_eq!(outcome.rehomed, 2);
    assert_eq!(store.component_count(), before - 1);
    assert_eq!(store.size(single), Some(expected_size));
    assert!(!store.is_live(pair));
    assert_eq!(store.size(pair), None);
    for id in [1, 2, 3] {
        assert_eq!(store.find(edge(id)), Some(single));
    }
    assert_eq!(store.components(), vec![single]);
    assert_eq!(store.rehomed_edges(), 2);
}

#[rstest]
fn merge_rejects_self_merge(seeded: (ComponentStore, ComponentId, ComponentId)) {
    let (mut store, pair, _) = seeded;
    let err = store.merge(pair, pair).expect_err("self merge must fail");
    assert_eq!(err, StoreError::SelfMerge { component: pair });
    assert_eq!(store.component_count(), 2);
}

#[rstest]
fn merge_rejects_retired_source(seeded: (ComponentStore, ComponentId, ComponentId)) {
    let (mut store, pair, single) = seeded;
    store.merge(single, pair).expect("first merge must succeed");

    let err = store
        .merge(single, pair)
        .expect_err("retired source must be rejected");
    assert_eq!(err, StoreError::NotLive { component: single });
    assert_eq!(store.size(pair), Some(3));
}

#[rstest]
fn merge_rejects_retired_destination_without_mutating(
    seeded: (ComponentStore, ComponentId, ComponentId),
) {
    let (mut store, pair, single) = seeded;
    let extra = store.get_or_create(edge(4));
    store.merge(single, pair).expect("first merge must succeed");

    let err = store
        .merge(extra, single)
        .expect_err("retired destination must be rejected");
    assert_eq!(err, StoreError::NotLive { component: single });
    assert!(store.is_live(extra));
    assert_eq!(store.find(edge(4)), Some(extra));
}

#[rstest]
fn merge_rejects_unknown_component() {
    let mut store = ComponentStore::new();
    let known = store.get_or_create(edge(1));
    let unknown = ComponentId::from_slot(10);
    let err = store
        .merge(unknown, known)
        .expect_err("unknown source must be rejected");
    assert_eq!(err.code(), crate::StoreErrorCode::NotLive);
}

#[rstest]
fn identities_are_not_reused_after_retirement() {
    let mut store = ComponentStore::new();
    let first = store.get_or_create(edge(1));
    let second = store.get_or_create(edge(2));
    store.merge(first, second).expect("merge must succeed");
    let third = store.get_or_create(edge(3));
    assert_ne!(third, first);
    assert_eq!(store.components(), vec![second, third]);
}

#[rstest]
fn into_partition_keeps_only_live_components(seeded: (ComponentStore, ComponentId, ComponentId)) {
    let (mut store, pair, single) = seeded;
    store.get_or_create(edge(4));
    store.merge(single, pair).expect("merge must succeed");

    let partition = store.into_partition();
    assert_eq!(partition.len(), 2);
    assert_eq!(partition.edge_count(), 4);
    assert_eq!(
        partition.canonical(),
        vec![vec![edge(1), edge(2), edge(3)], vec![edge(4)]]
    );
}
