//! Destination selection.
//!
//! Two passes over the pool, both excluding the group's current and start
//! houses and measuring Manhattan distance from the current house:
//!
//! 1. Houses holding at least `size` candy, nearest first.  Ties go to the
//!    lowest index: the strict `<` keeps the first house found.
//! 2. If no house qualifies, nearest house regardless of stock.  Here the
//!    comparison is `<=`, so among equal-distance ties the last house scanned
//!    (highest index) wins.
//! 3. If even the fallback scans nothing (a pool of one or two houses), the
//!    group stays bound to its start house.
//!
//! Stock counts come from `peek` and may be stale by arrival.  The eventual
//! `take` clamps, so a stale read costs at most a partly wasted trip — never
//! an error.

use tt_core::HouseId;
use tt_pool::HousePool;

/// Outcome of a selection pass: where to go and how far away it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub house:    HouseId,
    pub distance: u32,
}

/// Pick the next house for a group of `size` currently at `current` that
/// started at `start`.
pub fn select_destination(
    pool:    &HousePool,
    current: HouseId,
    start:   HouseId,
    size:    u32,
) -> Choice {
    let from = pool.peek(current).loc;
    let views = pool.views();

    // Pass 1: enough candy for the whole group, strictly nearer than the
    // best so far.
    let mut best: Option<Choice> = None;
    for view in &views {
        if view.id == current || view.id == start {
            continue;
        }
        let distance = from.manhattan(view.loc);
        let nearer = best.is_none_or(|b| distance < b.distance);
        if nearer && view.available >= size {
            best = Some(Choice { house: view.id, distance });
        }
    }
    if let Some(choice) = best {
        return choice;
    }

    // Pass 2: stock ignored; `<=` lets later equal-distance houses displace
    // earlier ones.
    for view in &views {
        if view.id == current || view.id == start {
            continue;
        }
        let distance = from.manhattan(view.loc);
        if best.is_none_or(|b| distance <= b.distance) {
            best = Some(Choice { house: view.id, distance });
        }
    }

    // Degenerate pool: nowhere to go but home.
    best.unwrap_or(Choice {
        house:    start,
        distance: from.manhattan(pool.peek(start).loc),
    })
}
