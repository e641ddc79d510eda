//! `tt-pool` — the shared resource pool of houses.
//!
//! # Locking discipline
//!
//! Every [`House`] wraps its candy count in its own `Mutex`.  `take` and
//! `refill` hold that one lock for the duration of the arithmetic update and
//! nothing else: no I/O, no second lock, no callback.  Operations on
//! different houses never contend, and because no code path ever holds two
//! house locks at once, deadlock is structurally impossible.
//!
//! `peek` returns a snapshot that may be stale by the time the caller acts
//! on it.  That is deliberate: destination selection tolerates staleness
//! because the eventual `take` clamps to whatever is actually left.

pub mod house;
pub mod pool;


pub use house::House;
pub use pool::{HousePool, HouseView};
