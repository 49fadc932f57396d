//! Synthetic networks for exercising the merge strategies.
//!
//! [`interleaved_chain`] is the adversarial input: it makes the naive policy
//! re-home the growing component on every merge. [`random_forest`] builds a
//! seeded, shuffled forest with a known number of subnetworks.

use netsplit_core::{AdjacencyList, EdgeId};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use thiserror::Error;

/// Errors raised when a generator configuration is unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The network must contain at least one edge.
    #[error("edge_count must be greater than zero")]
    ZeroEdges,
    /// The forest must contain at least one tree.
    #[error("tree_count must be greater than zero")]
    ZeroTrees,
    /// Every tree needs a root edge.
    #[error("tree_count ({tree_count}) exceeds edge_count ({edge_count})")]
    TooManyTrees {
        /// Requested number of trees.
        tree_count: u64,
        /// Requested number of edges.
        edge_count: u64,
    },
}

/// Chain `1 - 2 - ... - length` listed with even keys first, then odd keys.
///
/// Each key `k < length` names `k + 1` as its only neighbour. The even pass
/// creates disjoint pairs; the odd pass then stitches them together with the
/// growing component always on the entry side.
///
/// # Errors
/// Returns [`GraphError::ZeroEdges`] when `length` is zero.
///
/// # Examples
/// ```
/// use netsplit_benches::graphs::interleaved_chain;
/// use netsplit_core::AdjacencySource;
///
/// let chain = interleaved_chain(5)?;
/// let keys: Vec<u64> = chain.entries().map(|(edge, _)| edge.get()).collect();
/// assert_eq!(keys, vec![2, 4, 1, 3]);
/// # Ok::<(), netsplit_benches::graphs::GraphError>(())
/// ```
pub fn interleaved_chain(length: u64) -> Result<AdjacencyList, GraphError> {
    if length == 0 {
        return Err(GraphError::ZeroEdges);
    }
    let evens = (1..length).filter(|key| key.is_multiple_of(2));
    let odds = (1..length).filter(|key| !key.is_multiple_of(2));
    let mut list = AdjacencyList::from_pairs(
        "interleaved-chain",
        evens.chain(odds).map(|key| (key, [key + 1])),
    );
    if length == 1 {
        list.push(EdgeId::new(1), Vec::new());
    }
    Ok(list)
}

/// Configuration for [`random_forest`].
#[derive(Clone, Copy, Debug)]
pub struct ForestConfig {
    /// Number of distinct edges, numbered `0..edge_count`.
    pub edge_count: u64,
    /// Number of disconnected trees.
    pub tree_count: u64,
    /// Seed for tree assignment, parent choice and entry order.
    pub seed: u64,
}

/// Random forest with exactly `tree_count` subnetworks.
///
/// Edges `0..tree_count` are roots with no neighbours. Every later edge joins
/// a random tree and names a random earlier member of that tree as its
/// neighbour. Entries are shuffled so merges happen in no particular order.
///
/// # Errors
/// Returns [`GraphError`] when either count is zero or there are more trees
/// than edges.
pub fn random_forest(config: &ForestConfig) -> Result<AdjacencyList, GraphError> {
    let ForestConfig {
        edge_count,
        tree_count,
        seed,
    } = *config;
    if edge_count == 0 {
        return Err(GraphError::ZeroEdges);
    }
    if tree_count == 0 {
        return Err(GraphError::ZeroTrees);
    }
    if tree_count > edge_count {
        return Err(GraphError::TooManyTrees {
            tree_count,
            edge_count,
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut trees: Vec<Vec<u64>> = (0..tree_count).map(|root| vec![root]).collect();
    let mut entries: Vec<(u64, Vec<u64>)> =
        (0..tree_count).map(|root| (root, Vec::new())).collect();

    for edge in tree_count..edge_count {
        let Some(members) = trees.choose_mut(&mut rng) else {
            break;
        };
        let parent = members
            .get(rng.gen_range(0..members.len()))
            .copied()
            .unwrap_or_default();
        members.push(edge);
        entries.push((edge, vec![parent]));
    }
    entries.shuffle(&mut rng);

    Ok(AdjacencyList::from_pairs("random-forest", entries))
}
