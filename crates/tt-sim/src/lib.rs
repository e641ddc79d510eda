//! `tt-sim` — the simulation coordinator.
//!
//! # Run shape
//!
//! ```text
//! ① Spawn    — one forage thread per group, then the refill feed.
//! ② Report   — `duration` one-second ticks; tick 0 fires immediately,
//!              each later tick after a 1 s wall-clock sleep.  Snapshots
//!              are relaxed reads: cheap, possibly one update stale.
//! ③ Shutdown — set the stop signal (irreversible), join every group
//!              thread, emit the final snapshot from now-quiescent group
//!              state, then join the feed.
//! ```
//!
//! The final snapshot is consistent for groups (all joined) while the feed
//! may still land one last refill concurrently; house rows tolerate that
//! one-entry window.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_sim::{Scenario, SimBuilder, SimConfig, NoopObserver};
//!
//! let (scenario, schedule) = Scenario::open(path)?;
//! let sim = SimBuilder::new(SimConfig { duration_secs: 30 }, scenario)
//!     .schedule(schedule)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scenario;
pub mod sim;
pub mod snapshot;


pub use builder::{SimBuilder, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scenario::{HouseSpec, Scenario, HOUSE_COUNT};
pub use sim::Simulation;
pub use snapshot::{GroupRow, HouseRow, SimSnapshot};
