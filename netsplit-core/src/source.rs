//! Adjacency source abstractions for the netsplit core.

use crate::ids::EdgeId;

/// A network expressed as a mapping from edge to adjacent edges.
///
/// Entries are visited once, in [`AdjacencySource::entries`] order. The order
/// affects only intermediate component shapes, never the final partition.
///
/// # Examples
/// ```
/// use netsplit_core::{AdjacencySource, EdgeId};
///
/// struct Pair([EdgeId; 1]);
///
/// impl AdjacencySource for Pair {
///     fn name(&self) -> &str { "pair" }
///     fn len(&self) -> usize { 1 }
///     fn entries(&self) -> impl Iterator<Item = (EdgeId, &[EdgeId])> {
///         std::iter::once((EdgeId::new(1), &self.0[..]))
///     }
/// }
///
/// let source = Pair([EdgeId::new(2)]);
/// assert_eq!(source.len(), 1);
/// assert!(!source.is_empty());
/// assert_eq!(source.entries().count(), 1);
/// ```
pub trait AdjacencySource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the number of entries (keys) in the mapping.
    fn len(&self) -> usize;

    /// Returns whether the mapping has no entries.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(edge, neighbours)` entries.
    fn entries(&self) -> impl Iterator<Item = (EdgeId, &[EdgeId])>;
}

/// In-memory adjacency mapping that keeps entries in insertion order.
///
/// # Examples
/// ```
/// use netsplit_core::{AdjacencyList, AdjacencySource, EdgeId};
///
/// let mut list = AdjacencyList::new("cycle");
/// list.push(EdgeId::new(1), vec![EdgeId::new(2)]);
/// list.push(EdgeId::new(2), vec![EdgeId::new(3)]);
/// list.push(EdgeId::new(3), vec![EdgeId::new(1)]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.name(), "cycle");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    name: String,
    entries: Vec<(EdgeId, Vec<EdgeId>)>,
}

impl AdjacencyList {
    /// Creates an empty list.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Builds a list from raw numeric identifiers.
    ///
    /// # Examples
    /// ```
    /// use netsplit_core::{AdjacencyList, AdjacencySource};
    ///
    /// let list = AdjacencyList::from_pairs("demo", [(1, vec![2]), (2, vec![1])]);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn from_pairs<I, N>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (u64, N)>,
        N: IntoIterator<Item = u64>,
    {
        let entries = pairs
            .into_iter()
            .map(|(edge, neighbours)| {
                (
                    EdgeId::new(edge),
                    neighbours.into_iter().map(EdgeId::new).collect(),
                )
            })
            .collect();
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Appends an entry. Repeated keys are kept as separate entries.
    pub fn push(&mut self, edge: EdgeId, neighbours: Vec<EdgeId>) {
        self.entries.push((edge, neighbours));
    }

    /// Every distinct edge mentioned as a key or as a neighbour, sorted.
    #[must_use]
    pub fn edge_universe(&self) -> Vec<EdgeId> {
        let mut edges: Vec<EdgeId> = self
            .entries
            .iter()
            .flat_map(|(edge, neighbours)| std::iter::once(edge).chain(neighbours))
            .copied()
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }
}

impl AdjacencySource for AdjacencyList {
    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> impl Iterator<Item = (EdgeId, &[EdgeId])> {
        self.entries
            .iter()
            .map(|(edge, neighbours)| (*edge, neighbours.as_slice()))
    }
}
