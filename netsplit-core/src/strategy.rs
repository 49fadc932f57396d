//! Policies deciding which component absorbs the other during a merge.
//!
//! Both policies yield the same final partition; they differ only in how many
//! membership index updates a pass performs. [`NaiveMerge`] always folds the
//! side being processed into the neighbour's component, which can re-home a
//! growing component over and over. [`SizeAwareMerge`] folds the smaller
//! component into the larger one, so an edge is re-homed at most
//! `log2(final component size)` times over a whole pass.

use std::fmt;

use crate::ids::ComponentId;

/// A component taking part in a merge, with its size at decision time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Identity of the component.
    pub id: ComponentId,
    /// Number of edges the component currently owns.
    pub size: usize,
}

/// Direction of a merge: `source` is absorbed into `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    /// Component to retire.
    pub source: ComponentId,
    /// Component that survives and receives the edges.
    pub destination: ComponentId,
}

/// Chooses the merge direction for two distinct live components.
///
/// `from` is the component of the entry currently being processed; `to` is
/// the component the neighbour was found in.
pub trait MergeStrategy {
    /// Returns which side to absorb into which.
    fn orient(&self, from: Candidate, to: Candidate) -> Orientation;
}

/// Always folds `from` into `to`.
///
/// # Examples
/// ```
/// use netsplit_core::{Candidate, ComponentStore, EdgeId, MergeStrategy, NaiveMerge};
///
/// let mut store = ComponentStore::new();
/// let big = store.get_or_create(EdgeId::new(1));
/// store.attach(EdgeId::new(2), big)?;
/// let small = store.get_or_create(EdgeId::new(3));
///
/// let orientation = NaiveMerge.orient(
///     Candidate { id: big, size: 2 },
///     Candidate { id: small, size: 1 },
/// );
/// assert_eq!(orientation.source, big);
/// assert_eq!(orientation.destination, small);
/// # Ok::<(), netsplit_core::StoreError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveMerge;

impl MergeStrategy for NaiveMerge {
    fn orient(&self, from: Candidate, to: Candidate) -> Orientation {
        Orientation {
            source: from.id,
            destination: to.id,
        }
    }
}

/// Folds the smaller component into the larger one; on a tie `to` survives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeAwareMerge;

impl MergeStrategy for SizeAwareMerge {
    fn orient(&self, from: Candidate, to: Candidate) -> Orientation {
        let (smaller, larger) = if to.size < from.size {
            (to, from)
        } else {
            (from, to)
        };
        Orientation {
            source: smaller.id,
            destination: larger.id,
        }
    }
}

/// Runtime selection between the built-in strategies.
///
/// # Examples
/// ```
/// use netsplit_core::StrategyKind;
///
/// assert_eq!(StrategyKind::default(), StrategyKind::SizeAware);
/// assert_eq!(StrategyKind::Naive.as_str(), "naive");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Use [`NaiveMerge`].
    Naive,
    /// Use [`SizeAwareMerge`].
    #[default]
    SizeAware,
}

impl StrategyKind {
    /// Stable name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::SizeAware => "size-aware",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MergeStrategy for StrategyKind {
    fn orient(&self, from: Candidate, to: Candidate) -> Orientation {
        match self {
            Self::Naive => NaiveMerge.orient(from, to),
            Self::SizeAware => SizeAwareMerge.orient(from, to),
        }
    }
}
