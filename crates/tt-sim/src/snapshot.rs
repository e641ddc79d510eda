//! Point-in-time report data.

use tt_core::{GroupId, HouseId};

/// Status of one group at snapshot time.
///
/// Periodic snapshots read the runner threads' fields without
/// synchronization beyond relaxed atomics, so a row may trail its group by
/// one update; the final snapshot is taken after every group has joined and
/// is exact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupRow {
    pub id:          GroupId,
    pub size:        u32,
    pub destination: HouseId,
    pub collected:   u64,
}

/// Status of one house at snapshot time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HouseRow {
    pub id:        HouseId,
    pub x:         u32,
    pub y:         u32,
    pub available: u32,
}

/// One full status report: every group, every house, and the summed total.
#[derive(Clone, Debug)]
pub struct SimSnapshot {
    pub elapsed_secs:    u64,
    pub groups:          Vec<GroupRow>,
    pub houses:          Vec<HouseRow>,
    /// Sum of all groups' `collected` — derived, not stored anywhere else.
    pub total_collected: u64,
}
