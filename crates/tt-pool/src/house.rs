//! A single resource node.

use std::sync::{Mutex, MutexGuard};

use tt_core::GridPoint;

/// A fixed-location house holding a depletable, refillable candy count.
///
/// The coordinates are immutable after construction.  `available` is read
/// and modified only under this house's own lock and can never go negative:
/// `take` clamps to the remaining stock rather than underflowing.
pub struct House {
    /// Grid location, fixed at load time.
    pub loc: GridPoint,
    available: Mutex<u32>,
}

impl House {
    pub fn new(loc: GridPoint, initial: u32) -> Self {
        Self {
            loc,
            available: Mutex::new(initial),
        }
    }

    /// Remove up to `requested` candy, returning the amount actually taken.
    ///
    /// A group larger than the remaining stock takes whatever is left.
    /// Holds the lock only for the arithmetic; never blocks beyond that,
    /// never fails.
    pub fn take(&self, requested: u32) -> u32 {
        let mut available = self.lock();
        let actual = requested.min(*available);
        *available -= actual;
        actual
    }

    /// Add `amount` candy.  No upper bound, never fails.
    pub fn refill(&self, amount: u32) {
        *self.lock() += amount;
    }

    /// Lock-guarded snapshot of the current count.  Stale the moment the
    /// lock is released; callers must not treat it as a reservation.
    pub fn available(&self) -> u32 {
        *self.lock()
    }

    // A poisoned count is still a valid u32 — recover the guard so take and
    // refill stay infallible.
    fn lock(&self) -> MutexGuard<'_, u32> {
        self.available.lock().unwrap_or_else(|e| e.into_inner())
    }
}
