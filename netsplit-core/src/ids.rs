//! Identifiers for edges and for the components that own them.
//!
//! A [`ComponentId`] names a component independently of its contents, so the
//! identity survives while edges are folded in during merges.

use std::fmt;

/// Opaque identifier of an edge in the input network.
///
/// # Examples
/// ```
/// use netsplit_core::EdgeId;
///
/// let edge = EdgeId::new(42);
/// assert_eq!(edge.get(), 42);
/// assert_eq!(edge.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates an edge identifier from its numeric value.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identity of a component.
///
/// Identities are arena slot indices handed out by the
/// [`ComponentStore`](crate::ComponentStore) in allocation order and never
/// reused within a run.
///
/// # Examples
/// ```
/// use netsplit_core::{ComponentStore, EdgeId};
///
/// let mut store = ComponentStore::new();
/// let first = store.get_or_create(EdgeId::new(7));
/// let second = store.get_or_create(EdgeId::new(8));
/// assert_eq!(first.get(), 0);
/// assert_eq!(second.get(), 1);
/// assert_eq!(second.to_string(), "#1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(usize);

impl ComponentId {
    pub(crate) const fn from_slot(slot: usize) -> Self {
        Self(slot)
    }

    /// Returns the arena slot backing this identity.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
