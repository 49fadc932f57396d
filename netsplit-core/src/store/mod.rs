//! Partition state for a single splitting pass.
//!
//! The store keeps two structures consistent with each other:
//!
//! - the membership index, mapping every edge seen so far to the component
//!   that currently owns it;
//! - an arena of components addressed by [`ComponentId`], where a slot holds
//!   the component's edges while it is live and is emptied once the component
//!   is absorbed by a merge.
//!
//! Slots are never reused, so a retired identity can not be confused with a
//! later component. The registry of live components is the set of occupied
//! slots.

use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::StoreError,
    ids::{ComponentId, EdgeId},
    partition::{Partition, Subnetwork},
};

/// Summary of a successful [`ComponentStore::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Component that absorbed the other side and remains live.
    pub survivor: ComponentId,
    /// Component that was absorbed and is no longer live.
    pub retired: ComponentId,
    /// Number of edges re-pointed in the membership index.
    pub rehomed: usize,
}

/// Owns the membership index and the registry of live components.
///
/// # Examples
/// ```
/// use netsplit_core::{ComponentStore, EdgeId};
///
/// let mut store = ComponentStore::new();
/// let left = store.get_or_create(EdgeId::new(1));
/// let right = store.get_or_create(EdgeId::new(2));
/// assert_eq!(store.component_count(), 2);
///
/// let outcome = store.merge(left, right)?;
/// assert_eq!(outcome.survivor, right);
/// assert_eq!(store.component_count(), 1);
/// assert_eq!(store.find(EdgeId::new(1)), Some(right));
/// # Ok::<(), netsplit_core::StoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentStore {
    membership: HashMap<EdgeId, ComponentId>,
    slots: Vec<Option<Vec<EdgeId>>>,
    live: usize,
    rehomed: u64,
}

impl ComponentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store sized for roughly `edges` distinct edges.
    #[must_use]
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            membership: HashMap::with_capacity(edges),
            ..Self::default()
        }
    }

    /// Returns the component owning `edge`, creating a singleton component
    /// for it when the edge has not been seen before.
    pub fn get_or_create(&mut self, edge: EdgeId) -> ComponentId {
        if let Some(&owner) = self.membership.get(&edge) {
            return owner;
        }

        let component = ComponentId::from_slot(self.slots.len());
        self.slots.push(Some(vec![edge]));
        self.membership.insert(edge, component);
        self.live += 1;
        component
    }

    /// Looks up the component currently owning `edge`.
    #[must_use]
    pub fn find(&self, edge: EdgeId) -> Option<ComponentId> {
        self.membership.get(&edge).copied()
    }

    /// Places a never-seen `edge` directly into the live `component`.
    ///
    /// # Errors
    /// Returns [`StoreError::EdgeAlreadyHomed`] when the edge already has an
    /// owner and [`StoreError::NotLive`] when `component` is not live. The
    /// store is left untouched in both cases.
    pub fn attach(&mut self, edge: EdgeId, component: ComponentId) -> Result<(), StoreError> {
        if let Some(&owner) = self.membership.get(&edge) {
            return Err(StoreError::EdgeAlreadyHomed { edge, owner });
        }

        live_slot_mut(&mut self.slots, component)?.push(edge);
        self.membership.insert(edge, component);
        Ok(())
    }

    /// Folds every edge of `source` into `destination` and retires `source`.
    ///
    /// Afterwards `destination` owns the union of both edge sets, each edge
    /// formerly owned by `source` points at `destination` in the membership
    /// index, and the live component count has dropped by one.
    ///
    /// # Errors
    /// Returns [`StoreError::SelfMerge`] when both arguments name the same
    /// component and [`StoreError::NotLive`] when either side is not live.
    /// Both indicate a bookkeeping defect in the caller; the store is left
    /// untouched.
    pub fn merge(
        &mut self,
        source: ComponentId,
        destination: ComponentId,
    ) -> Result<MergeOutcome, StoreError> {
        if source == destination {
            return Err(StoreError::SelfMerge { component: source });
        }
        if !self.is_live(destination) {
            return Err(StoreError::NotLive {
                component: destination,
            });
        }

        let absorbed = self
            .slots
            .get_mut(source.get())
            .and_then(Option::take)
            .ok_or(StoreError::NotLive { component: source })?;

        for &edge in &absorbed {
            self.membership.insert(edge, destination);
        }
        let rehomed = absorbed.len();
        let destination_edges = live_slot_mut(&mut self.slots, destination)?;
        destination_edges.extend(absorbed);

        self.live -= 1;
        self.rehomed = self.rehomed.saturating_add(rehomed as u64);
        trace!(%source, %destination, rehomed, "merged components");

        Ok(MergeOutcome {
            survivor: destination,
            retired: source,
            rehomed,
        })
    }

    /// Returns whether `component` is currently live.
    #[must_use]
    pub fn is_live(&self, component: ComponentId) -> bool {
        matches!(self.slots.get(component.get()), Some(Some(_)))
    }

    /// Returns the number of edges owned by `component`, or `None` when it is
    /// not live.
    #[must_use]
    pub fn size(&self, component: ComponentId) -> Option<usize> {
        self.members(component).map(<[EdgeId]>::len)
    }

    /// Returns the edges owned by `component` in the order they joined it, or
    /// `None` when it is not live.
    #[must_use]
    pub fn members(&self, component: ComponentId) -> Option<&[EdgeId]> {
        self.slots
            .get(component.get())
            .and_then(Option::as_deref)
    }

    /// Number of live components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.live
    }

    /// Number of distinct edges seen so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.membership.len()
    }

    /// Snapshot of the live component identities in allocation order.
    #[must_use]
    pub fn components(&self) -> Vec<ComponentId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| ComponentId::from_slot(index))
            .collect()
    }

    /// Total number of membership index updates performed by merges.
    #[must_use]
    pub fn rehomed_edges(&self) -> u64 {
        self.rehomed
    }

    /// Consumes the store and returns the live components as a [`Partition`].
    #[must_use]
    pub fn into_partition(self) -> Partition {
        let subnetworks = self
            .slots
            .into_iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let edges = slot?;
                Some(Subnetwork::new(ComponentId::from_slot(index), edges))
            })
            .collect();
        Partition::from_subnetworks(subnetworks)
    }
}

fn live_slot_mut(
    slots: &mut [Option<Vec<EdgeId>>],
    component: ComponentId,
) -> Result<&mut Vec<EdgeId>, StoreError> {
    slots
        .get_mut(component.get())
        .and_then(Option::as_mut)
        .ok_or(StoreError::NotLive { component })
}

#[cfg(test)]
mod tests;
