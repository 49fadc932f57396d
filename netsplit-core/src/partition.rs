//! Final membership produced by a splitting pass.

use crate::ids::{ComponentId, EdgeId};

/// A maximal set of mutually connected edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subnetwork {
    id: ComponentId,
    edges: Vec<EdgeId>,
}

impl Subnetwork {
    pub(crate) fn new(id: ComponentId, edges: Vec<EdgeId>) -> Self {
        Self { id, edges }
    }

    /// Identity of the component that survived the pass.
    #[must_use]
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Edges in the subnetwork, in the order they joined it.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of edges in the subnetwork.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always `false` for subnetworks produced by a pass.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Disjoint subnetworks covering every edge of the input.
///
/// Component identities depend on processing order and merge strategy, so
/// two partitions should be compared through [`Partition::canonical`].
///
/// # Examples
/// ```
/// use netsplit_core::{AdjacencyList, EdgeId, SplitterBuilder};
///
/// let source = AdjacencyList::from_pairs("demo", [(1, vec![2]), (3, vec![4])]);
/// let splitter = SplitterBuilder::new().build()?;
/// let partition = splitter.run(&source)?.partition;
/// assert_eq!(partition.len(), 2);
/// assert_eq!(
///     partition.canonical(),
///     vec![
///         vec![EdgeId::new(1), EdgeId::new(2)],
///         vec![EdgeId::new(3), EdgeId::new(4)],
///     ],
/// );
/// # Ok::<(), netsplit_core::NetsplitError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    subnetworks: Vec<Subnetwork>,
}

impl Partition {
    pub(crate) fn from_subnetworks(subnetworks: Vec<Subnetwork>) -> Self {
        Self { subnetworks }
    }

    /// Number of disconnected subnetworks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subnetworks.len()
    }

    /// Returns whether the partition has no subnetworks (empty input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subnetworks.is_empty()
    }

    /// Subnetworks in component allocation order.
    #[must_use]
    pub fn subnetworks(&self) -> &[Subnetwork] {
        &self.subnetworks
    }

    /// Total number of edges across all subnetworks.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.subnetworks.iter().map(Subnetwork::len).sum()
    }

    /// The subnetwork with the most edges, if any. Ties resolve to the
    /// earliest allocated component.
    #[must_use]
    pub fn largest(&self) -> Option<&Subnetwork> {
        self.subnetworks
            .iter()
            .rev()
            .max_by_key(|subnetwork| subnetwork.len())
    }

    /// Edge sets with identities stripped: each set sorted, and the sets
    /// ordered by their smallest edge.
    #[must_use]
    pub fn canonical(&self) -> Vec<Vec<EdgeId>> {
        let mut sets: Vec<Vec<EdgeId>> = self
            .subnetworks
            .iter()
            .map(|subnetwork| {
                let mut edges = subnetwork.edges.clone();
                edges.sort_unstable();
                edges
            })
            .collect();
        sets.sort_unstable();
        sets
    }
}
