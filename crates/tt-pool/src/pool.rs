//! The fixed arena of houses.

use tt_core::{GridPoint, HouseId};

use crate::House;

/// Read-only view of one house, as captured by [`HousePool::peek`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HouseView {
    pub id:        HouseId,
    pub loc:       GridPoint,
    pub available: u32,
}

/// The fixed collection of houses, indexed by [`HouseId`].
///
/// Created once at startup and shared by reference with every actor; houses
/// are never added or removed during a run.  All candy movement goes through
/// [`take`][Self::take] and [`refill`][Self::refill], which serialize on the
/// target house's own lock and touch nothing else.
///
/// # Panics
///
/// Methods taking a [`HouseId`] index directly into the arena; IDs come from
/// the validated scenario and the validated refill schedule, so an
/// out-of-range ID is a caller bug and panics.
pub struct HousePool {
    houses: Vec<House>,
}

impl HousePool {
    pub fn new(houses: Vec<House>) -> Self {
        Self { houses }
    }

    pub fn len(&self) -> usize {
        self.houses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }

    /// Atomically remove up to `requested` candy from `house`, returning the
    /// amount actually taken (clamped at the remaining stock).
    pub fn take(&self, house: HouseId, requested: u32) -> u32 {
        self.houses[house.index()].take(requested)
    }

    /// Atomically add `amount` candy to `house`.
    pub fn refill(&self, house: HouseId, amount: u32) {
        self.houses[house.index()].refill(amount);
    }

    /// Snapshot of one house.  Stale-tolerant by contract: the count may
    /// have changed by the time the caller acts on it.
    pub fn peek(&self, house: HouseId) -> HouseView {
        let h = &self.houses[house.index()];
        HouseView {
            id:        house,
            loc:       h.loc,
            available: h.available(),
        }
    }

    /// Per-house snapshots in index order, for selection scans and reports.
    ///
    /// Each house is peeked independently; the result is not a consistent
    /// cross-house cut while writers are active.
    pub fn views(&self) -> Vec<HouseView> {
        (0..self.houses.len() as u32)
            .map(|i| self.peek(HouseId(i)))
            .collect()
    }

    /// Sum of all houses' stock.  Only meaningful at quiescent points (no
    /// concurrent writers), e.g. conservation checks after joins.
    pub fn total_available(&self) -> u64 {
        self.houses.iter().map(|h| h.available() as u64).sum()
    }
}
