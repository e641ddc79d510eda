//! `tt-feed` — the background replenishment actor.
//!
//! A single thread races the foraging groups: every 250 ms it pulls the next
//! `<houseId> <amount>` entry from a lazy, finite schedule and pours that
//! much candy back into the pool.  The thread terminates when the schedule
//! runs dry or the stop signal is set, whichever comes first.
//!
//! The schedule is consumed strictly in file order and is never restarted;
//! re-running a schedule means re-opening its source, which this crate never
//! does.

pub mod error;
pub mod runner;
pub mod schedule;


pub use error::{FeedError, FeedResult};
pub use runner::FeedRunner;
pub use schedule::{Refill, RefillSchedule};
