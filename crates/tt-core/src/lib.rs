//! `tt-core` — foundational types for the trick-or-treat simulator.
//!
//! This crate is a dependency of every other `tt-*` crate.  It intentionally
//! has no `tt-*` dependencies and no external ones.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `HouseId`, `GroupId`                                  |
//! | [`grid`]    | `GridPoint`, Manhattan distance                       |
//! | [`stop`]    | `StopSignal` — cooperative shutdown flag              |
//! | [`timing`]  | travel-time and cadence constants                     |

pub mod grid;
pub mod ids;
pub mod stop;
pub mod timing;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use grid::GridPoint;
pub use ids::{GroupId, HouseId};
pub use stop::StopSignal;
pub use timing::{travel_duration, FEED_CADENCE, MS_PER_DISTANCE_UNIT, REPORT_INTERVAL};
