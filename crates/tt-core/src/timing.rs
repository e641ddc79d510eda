//! Wall-clock cadences shared by every actor.
//!
//! All three constants are real time, not simulated time: the simulator runs
//! against the wall clock, and a unit of Manhattan distance costs a fixed
//! 250 ms of walking.

use std::time::Duration;

/// Milliseconds of travel per unit of Manhattan distance.
pub const MS_PER_DISTANCE_UNIT: u64 = 250;

/// Pause between consecutive refill applications.  The feed also waits one
/// cadence before its very first entry, so no refill can land earlier than
/// 250 ms into a run.
pub const FEED_CADENCE: Duration = Duration::from_millis(250);

/// Wall-clock gap between periodic status snapshots.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Travel time for `distance` units of Manhattan distance.
#[inline]
pub fn travel_duration(distance: u32) -> Duration {
    Duration::from_millis(distance as u64 * MS_PER_DISTANCE_UNIT)
}
