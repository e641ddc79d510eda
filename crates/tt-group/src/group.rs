//! Group identity and cross-thread state.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use tt_core::{GroupId, HouseId};

/// Immutable description of one group, as loaded from the scenario file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupSpec {
    /// Where the group begins, and the one house it never revisits.
    pub start_house: HouseId,
    /// Member count — also the most candy the group carries away per visit.
    pub size: u32,
}

/// One trick-or-treating group.
///
/// Shared as `Arc<Group>` between the group's runner thread and the
/// coordinator.  The runner is the only writer.  The coordinator reads the
/// mutable fields mid-flight to build status snapshots; those reads are
/// relaxed atomics — possibly one update stale, never torn — so reporting
/// never blocks collection and collection never waits on reporting.
pub struct Group {
    pub id:          GroupId,
    pub start_house: HouseId,
    pub size:        u32,
    current_house:     AtomicU32,
    destination_house: AtomicU32,
    travel_ms:         AtomicU64,
    collected:         AtomicU64,
}

impl Group {
    /// A freshly loaded group: at its start house, destination likewise,
    /// nothing collected yet.
    pub fn new(id: GroupId, spec: GroupSpec) -> Self {
        Self {
            id,
            start_house: spec.start_house,
            size: spec.size,
            current_house:     AtomicU32::new(spec.start_house.0),
            destination_house: AtomicU32::new(spec.start_house.0),
            travel_ms:         AtomicU64::new(0),
            collected:         AtomicU64::new(0),
        }
    }

    pub fn current_house(&self) -> HouseId {
        HouseId(self.current_house.load(Ordering::Relaxed))
    }

    pub(crate) fn set_current_house(&self, house: HouseId) {
        self.current_house.store(house.0, Ordering::Relaxed);
    }

    pub fn destination_house(&self) -> HouseId {
        HouseId(self.destination_house.load(Ordering::Relaxed))
    }

    pub(crate) fn set_destination_house(&self, house: HouseId) {
        self.destination_house.store(house.0, Ordering::Relaxed);
    }

    /// Travel time of the most recent (possibly in-progress) leg.
    pub fn travel_ms(&self) -> u64 {
        self.travel_ms.load(Ordering::Relaxed)
    }

    pub(crate) fn set_travel_ms(&self, ms: u64) {
        self.travel_ms.store(ms, Ordering::Relaxed);
    }

    /// Cumulative candy collected.  Monotonically non-decreasing.
    pub fn collected(&self) -> u64 {
        self.collected.load(Ordering::Relaxed)
    }

    pub(crate) fn add_collected(&self, amount: u32) {
        self.collected.fetch_add(amount as u64, Ordering::Relaxed);
    }
}
